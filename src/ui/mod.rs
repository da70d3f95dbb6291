// src/ui/mod.rs
pub mod calculator;
pub mod breakdown;
pub mod assumptions;

use eframe::egui::Color32;
use crate::config::Category;

/// Accent color for a card category.
pub fn accent(category: Category) -> Color32 {
    match category {
        Category::TimeSavings => Color32::from_rgb(16, 185, 129),
        Category::TravelCostSavings => Color32::from_rgb(59, 130, 246),
        Category::ProductivityImprovements => Color32::from_rgb(168, 85, 247),
        Category::AdditionalBenefits => Color32::from_rgb(99, 102, 241),
    }
}
