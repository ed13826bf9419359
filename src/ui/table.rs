use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{EnrichedDataset, PostRecord};
use crate::ui::format_count;

const HEADERS: [&str; 10] = [
    "date",
    "platform",
    "content_type",
    "views",
    "likes",
    "comments",
    "shares",
    "year",
    "month",
    "engagement",
];

/// Display strings for one row, in `HEADERS` order.
fn post_cells(post: &PostRecord) -> [String; 10] {
    [
        post.date.format("%Y-%m-%d").to_string(),
        post.platform.clone(),
        post.content_type.clone(),
        format_count(u128::from(post.views)),
        format_count(u128::from(post.likes)),
        format_count(u128::from(post.comments)),
        format_count(u128::from(post.shares)),
        post.year.to_string(),
        post.month.to_string(),
        format_count(u128::from(post.engagement)),
    ]
}

/// Render the posts at `rows` (dataset positions) as a striped table.
pub fn posts_table(ui: &mut Ui, dataset: &EnrichedDataset, rows: &[usize]) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(60.0), HEADERS.len())
        .max_scroll_height(360.0)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let post = &dataset.posts[rows[row.index()]];
                for cell in post_cells(post) {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
