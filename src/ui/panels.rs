use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::month_name;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – period selection
// ---------------------------------------------------------------------------

/// Render the left selection panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Period");
    ui.separator();

    let (dataset, period) = match (&state.dataset, state.period) {
        (Some(ds), Some(p)) => (ds.clone(), p),
        (Some(_), None) => {
            ui.label("Dataset has no posts.");
            return;
        }
        (None, _) => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let mut year = period.year;
    ui.strong("Year");
    egui::ComboBox::from_id_salt("select_year")
        .selected_text(year.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for &y in dataset.distinct_years() {
                ui.selectable_value(&mut year, y, y.to_string());
            }
        });
    ui.add_space(6.0);

    let mut month = period.month;
    ui.strong("Month");
    egui::ComboBox::from_id_salt("select_month")
        .selected_text(month_name(month))
        .show_ui(ui, |ui: &mut Ui| {
            for &m in dataset.distinct_months() {
                ui.selectable_value(&mut month, m, month_name(m));
            }
        });

    if year != period.year {
        state.select_year(year);
    }
    if month != period.month {
        state.select_month(month);
    }

    ui.add_space(12.0);
    ui.separator();
    if let Some(report) = &state.report {
        ui.label(format!("{} posts in {}", report.rows.len(), report.period));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let visible = state.report.as_ref().map_or(0, |r| r.rows.len());
            ui.label(format!("{} posts loaded, {visible} in period", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open post data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_or_report(&path);
    }
}
