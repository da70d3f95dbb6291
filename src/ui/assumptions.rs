// src/ui/assumptions.rs
use eframe::egui;
use crate::analysis::SectionKey;
use crate::config::{KEY_ASSUMPTIONS, SectionInfo};
use crate::state::AppState;
use crate::utils::format_currency;

pub fn show_assumptions_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(format!(
        "Scenario: {} users at {} average salary",
        state.engine.users(),
        format_currency(state.engine.avg_salary() as f64)
    ));
    ui.add_space(8.0);

    ui.heading("Key Assumptions");
    ui.add_space(4.0);
    for line in KEY_ASSUMPTIONS {
        ui.label(format!("• {}", line));
    }

    ui.add_space(12.0);
    ui.heading("Section Formulas");
    ui.add_space(4.0);
    egui::Grid::new("formula_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for info in SectionInfo::catalog() {
                ui.label(info.title);
                ui.label(formula_summary(info.key));
                ui.end_row();
            }
        });
}

fn formula_summary(key: SectionKey) -> &'static str {
    match key {
        SectionKey::MeetingEfficiency => "10 hours saved per user per year",
        SectionKey::MeetingReduction => "50 hours saved per user per year",
        SectionKey::VirtualEvents => "30% of users save $2,000 in event travel",
        SectionKey::WorkshopCollaboration => "20% of users halve a $3,500 international trip",
        SectionKey::SupportTimeReduction => "2.5 hours saved per user per week",
        SectionKey::BrainstormingEfficiency => "Half of 8 monthly brainstorming hours saved",
        SectionKey::OnboardingTimeReduction => "$2,560 saved per new hire, 15% turnover",
        SectionKey::AdminTimeReduction => "1% of users save 11 admin hours per week",
        SectionKey::PipelineGeneration => "5% of users are reps adding 40% of a $75,000 monthly quota",
    }
}
