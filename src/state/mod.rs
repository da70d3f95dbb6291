// src/state/mod.rs
use crate::analysis::RoiEngine;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Calculator,
    Breakdown,
    Assumptions,
}

// Core application state. The engine is owned here and handed to the views
// by reference; all mutation goes through its setters.
#[derive(Debug)]
pub struct AppState {
    pub engine: RoiEngine,

    // Minimal UI state
    pub current_screen: Screen,
    pub error_message: Option<String>,

    // Text buffers backing the two scenario inputs. The engine keeps the
    // clamped values; these keep whatever the user is mid-typing.
    pub users_input: String,
    pub salary_input: String,
}

impl AppState {
    pub fn new() -> Self {
        let engine = RoiEngine::new();
        let users_input = engine.users().to_string();
        let salary_input = engine.avg_salary().to_string();
        Self {
            engine,
            current_screen: Screen::Calculator,
            error_message: None,
            users_input,
            salary_input,
        }
    }

    /// File > New Scenario: back to the default inputs with every section on.
    pub fn reset_scenario(&mut self) {
        let fresh = AppState::new();
        self.engine = fresh.engine;
        self.users_input = fresh.users_input;
        self.salary_input = fresh.salary_input;
    }

    /// Snap the input buffers back to the engine's clamped values, e.g. when
    /// an input field loses focus after out-of-range or non-numeric text.
    pub fn sync_input_buffers(&mut self) {
        self.users_input = self.engine.users().to_string();
        self.salary_input = self.engine.avg_salary().to_string();
    }
}
