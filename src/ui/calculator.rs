// src/ui/calculator.rs
use eframe::egui;
use crate::config::{CardValue, Category, SectionInfo};
use crate::state::AppState;
use crate::utils::{format_currency, format_hours};

pub fn show_calculator_view(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .id_source("calculator_scroll")
        .show(ui, |ui| {
            show_input_section(ui, state);
            ui.add_space(8.0);
            show_summary_section(ui, state);
            ui.add_space(12.0);

            for category in Category::ALL {
                show_category_section(ui, state, category);
                ui.add_space(12.0);
            }
        });
}

fn show_input_section(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Scenario");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Number of users:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.users_input).desired_width(100.0),
            );
            if response.changed() {
                let text = state.users_input.clone();
                state.engine.set_users_text(&text);
            }
            if response.lost_focus() {
                state.sync_input_buffers();
            }
            ui.label(egui::RichText::new("1 – 10,000").weak());
        });

        ui.horizontal(|ui| {
            ui.label("Average annual salary:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.salary_input).desired_width(100.0),
            );
            if response.changed() {
                let text = state.salary_input.clone();
                state.engine.set_salary_text(&text);
            }
            if response.lost_focus() {
                state.sync_input_buffers();
            }
            ui.label(egui::RichText::new("$30,000 – $500,000").weak());
        });

        ui.label(format!(
            "Hourly rate: {}",
            format_currency(state.engine.results().hourly_rate)
        ));
    });
}

fn show_summary_section(ui: &mut egui::Ui, state: &mut AppState) {
    let results = *state.engine.results();

    ui.columns(3, |columns| {
        summary_card(
            &mut columns[0],
            format_hours(results.total_time_savings),
            "Total Hours Saved Annually",
            super::accent(Category::TimeSavings),
        );
        summary_card(
            &mut columns[1],
            format_currency(results.total_cost_savings),
            "Cost Savings & Efficiency",
            super::accent(Category::TravelCostSavings),
        );
        summary_card(
            &mut columns[2],
            format_currency(results.total_roi),
            "Total Annual ROI",
            super::accent(Category::ProductivityImprovements),
        );
    });
}

fn summary_card(ui: &mut egui::Ui, value: String, label: &str, color: egui::Color32) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(value).size(22.0).strong().color(color));
        ui.label(egui::RichText::new(label).weak());
    });
}

fn show_category_section(ui: &mut egui::Ui, state: &mut AppState, category: Category) {
    let color = super::accent(category);
    ui.heading(egui::RichText::new(category.title()).color(color));
    ui.add_space(4.0);

    let infos: Vec<&SectionInfo> = SectionInfo::catalog()
        .iter()
        .filter(|info| info.category == category)
        .collect();

    ui.columns(infos.len(), |columns| {
        for (column, info) in columns.iter_mut().zip(infos) {
            show_section_card(column, state, info, color);
        }
    });
}

fn show_section_card(
    ui: &mut egui::Ui,
    state: &mut AppState,
    info: &SectionInfo,
    color: egui::Color32,
) {
    let enabled = state.engine.section_enabled(info.key);
    let value = info.card_value(state.engine.results());

    ui.group(|ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(info.title).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let toggle_text = if enabled { "👁 Enabled" } else { "Disabled" };
                if ui.small_button(toggle_text).clicked() {
                    state.engine.toggle_section(info.key);
                }
            });
        });

        ui.label(egui::RichText::new(info.description).weak().small());
        ui.add_space(4.0);

        let value_color = if enabled { color } else { egui::Color32::GRAY };
        match value {
            CardValue::HoursAndDollars { hours, dollars } => {
                ui.label(
                    egui::RichText::new(format!("{} hours", format_hours(hours)))
                        .size(18.0)
                        .strong()
                        .color(value_color),
                );
                ui.label(
                    egui::RichText::new(format!("{} value", format_currency(dollars))).weak(),
                );
            }
            CardValue::Dollars { dollars } => {
                ui.label(
                    egui::RichText::new(format_currency(dollars))
                        .size(18.0)
                        .strong()
                        .color(value_color),
                );
            }
            CardValue::DollarsWithCount { dollars, count, count_label } => {
                ui.label(
                    egui::RichText::new(format_currency(dollars))
                        .size(18.0)
                        .strong()
                        .color(value_color),
                );
                ui.label(egui::RichText::new(format!("{} {}", count, count_label)).weak());
            }
        }
    });
}
