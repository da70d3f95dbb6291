// src/ui/breakdown.rs
use eframe::egui;
use crate::config::SectionInfo;
use crate::state::AppState;
use crate::utils::format_currency;

pub fn show_breakdown_view(ui: &mut egui::Ui, state: &mut AppState) {
    let results = *state.engine.results();

    ui.heading("Annual Dollar Impact by Section");
    ui.add_space(4.0);
    ui.label(format!(
        "Total annual ROI: {}  ·  Cost savings: {}",
        format_currency(results.total_roi),
        format_currency(results.total_cost_savings)
    ));
    ui.add_space(8.0);

    let plot = egui_plot::Plot::new("roi_breakdown")
        .height(320.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .include_y(0.0);

    plot.show(ui, |plot_ui| {
        let bars: Vec<egui_plot::Bar> = SectionInfo::catalog()
            .iter()
            .enumerate()
            .map(|(index, info)| {
                egui_plot::Bar::new((index + 1) as f64, results.dollars_for(info.key))
                    .name(info.title)
                    .width(0.6)
                    .fill(super::accent(info.category))
            })
            .collect();

        plot_ui.bar_chart(egui_plot::BarChart::new(bars));
    });

    ui.add_space(8.0);
    egui::Grid::new("breakdown_table")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui| {
            ui.label(egui::RichText::new("#").strong());
            ui.label(egui::RichText::new("Section").strong());
            ui.label(egui::RichText::new("Dollar value").strong());
            ui.end_row();

            for (index, info) in SectionInfo::catalog().iter().enumerate() {
                ui.label(format!("{}", index + 1));
                ui.label(info.title);
                ui.label(format_currency(results.dollars_for(info.key)));
                ui.end_row();
            }
        });
}
