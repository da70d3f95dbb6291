// src/app.rs
use eframe::egui;
use rfd::FileDialog;

use crate::state::{AppState, Screen};

pub struct LumenApp {
    state: AppState,
}

impl LumenApp {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New Scenario").clicked() {
                    self.state.reset_scenario();
                    ui.close_menu();
                }
                if ui.button("Export Report...").clicked() {
                    self.export_report();
                    ui.close_menu();
                }
            });

            ui.separator();

            // Tab selection using buttons
            let tabs = [
                (Screen::Calculator, "Calculator"),
                (Screen::Breakdown, "Breakdown"),
                (Screen::Assumptions, "Assumptions"),
            ];

            for (screen, label) in tabs {
                if ui.selectable_label(self.state.current_screen == screen, label).clicked() {
                    self.state.current_screen = screen;
                }
            }
        });
    }

    fn export_report(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_file_name("roi_report.csv")
            .set_title("Export ROI Report");

        if let Some(path) = file_dialog.save_file() {
            if let Err(e) = crate::file::write_csv_report(&path, &self.state.engine) {
                self.state.error_message = Some(format!("Error exporting report: {}", e));
            }
        }
    }
}

impl eframe::App for LumenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.current_screen {
                Screen::Calculator => {
                    crate::ui::calculator::show_calculator_view(ui, &mut self.state);
                },
                Screen::Breakdown => {
                    crate::ui::breakdown::show_breakdown_view(ui, &mut self.state);
                },
                Screen::Assumptions => {
                    crate::ui::assumptions::show_assumptions_view(ui, &mut self.state);
                },
            }
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone(); // Clone first
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
