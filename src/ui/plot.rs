use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::ColorMap;
use crate::data::aggregate::GroupedAggregate;

// ---------------------------------------------------------------------------
// Category bar chart
// ---------------------------------------------------------------------------

/// One bar per category, in label order. Each bar is its own chart so the
/// legend lists the categories with their colours.
pub fn category_bar_chart(ui: &mut Ui, id: &str, series: &GroupedAggregate, colors: &ColorMap, y_label: &str) {
    Plot::new(id)
        .legend(Legend::default())
        .height(260.0)
        .y_axis_label(y_label)
        .show_axes([false, true])
        .include_y(0.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for (i, (category, &total)) in series.iter().enumerate() {
                let bar = Bar::new(i as f64, total as f64).width(0.6).name(category);
                let chart = BarChart::new(vec![bar])
                    .color(colors.color_for(category))
                    .name(category);
                plot_ui.bar_chart(chart);
            }
        });
}
