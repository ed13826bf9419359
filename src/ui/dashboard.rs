use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::aggregate::CategoryTotal;
use crate::state::AppState;
use crate::ui::{format_count, plot, table};

const NO_DATA: &str = "No data available for the selected year and month.";

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render insights, charts and the filtered rows for the selected period.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let (dataset, report) = match (&state.dataset, &state.report) {
        (Some(ds), Some(report)) => (ds, report),
        (Some(_), None) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("The loaded file contains no posts.");
            });
            return;
        }
        (None, _) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a file to view engagement  (File → Open…)");
            });
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Social Media Engagement Analytics Dashboard");
            ui.label(format!(
                "Showing {}. Pick another year or month on the left to compare.",
                report.period
            ));
            ui.add_space(8.0);

            let Some(insights) = &report.insights else {
                ui.colored_label(Color32::from_rgb(230, 160, 30), NO_DATA);
                return;
            };

            // ---- Key insights ----
            ui.strong("Key Insights");
            ui.columns(4, |cols| {
                insight_card(&mut cols[0], "Most Viewed Platform", &insights.most_viewed_platform, "views");
                insight_card(&mut cols[1], "Most Engaged Platform", &insights.most_engaged_platform, "interactions");
                insight_card(&mut cols[2], "Most Viewed Content", &insights.most_viewed_content, "views");
                insight_card(&mut cols[3], "Most Engaged Content", &insights.most_engaged_content, "interactions");
            });
            ui.add_space(12.0);

            // ---- Charts ----
            ui.strong("Visual Analysis");
            ui.columns(2, |cols| {
                cols[0].label("Views by Platform");
                plot::category_bar_chart(
                    &mut cols[0],
                    "views_by_platform",
                    &report.views_by_platform,
                    &state.platform_colors,
                    "Views",
                );
                cols[1].label("Engagement by Content Type");
                plot::category_bar_chart(
                    &mut cols[1],
                    "engagement_by_content",
                    &report.engagement_by_content,
                    &state.content_colors,
                    "Engagement",
                );
            });
            ui.add_space(12.0);

            // ---- Raw rows ----
            egui::CollapsingHeader::new(RichText::new("View Filtered Data").strong())
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    table::posts_table(ui, dataset, &report.rows);
                });
        });
}

fn insight_card(ui: &mut Ui, title: &str, winner: &CategoryTotal, unit: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(title);
        ui.label(RichText::new(&winner.category).size(22.0).strong());
        ui.small(format!("{} {unit}", format_count(winner.total)));
    });
}
