// src/config/section.rs
use serde::{Serialize, Deserialize};
use crate::analysis::roi::{RoiResults, SectionKey};

/// Display grouping for the benefit cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    TimeSavings,
    TravelCostSavings,
    ProductivityImprovements,
    AdditionalBenefits,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::TimeSavings,
        Category::TravelCostSavings,
        Category::ProductivityImprovements,
        Category::AdditionalBenefits,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::TimeSavings => "Time Savings",
            Category::TravelCostSavings => "Travel Cost Savings",
            Category::ProductivityImprovements => "Productivity Improvements",
            Category::AdditionalBenefits => "Additional ROI Benefits",
        }
    }
}

/// Presentation metadata for one benefit section.
#[derive(Debug, Clone, Copy)]
pub struct SectionInfo {
    pub key: SectionKey,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
}

static CATALOG: [SectionInfo; 9] = [
    SectionInfo {
        key: SectionKey::MeetingEfficiency,
        title: "Meeting Efficiency",
        description: "Asynchronous brainstorming replaces long meetings",
        category: Category::TimeSavings,
    },
    SectionInfo {
        key: SectionKey::MeetingReduction,
        title: "Meeting Reduction",
        description: "83% reduction in cross-functional meetings",
        category: Category::TimeSavings,
    },
    SectionInfo {
        key: SectionKey::VirtualEvents,
        title: "Virtual Events",
        description: "Replace in-person events with virtual collaboration",
        category: Category::TravelCostSavings,
    },
    SectionInfo {
        key: SectionKey::WorkshopCollaboration,
        title: "Workshop Collaboration",
        description: "Online workshops replace travel",
        category: Category::TravelCostSavings,
    },
    SectionInfo {
        key: SectionKey::SupportTimeReduction,
        title: "Support Time Reduction",
        description: "Visual diagrams reduce triage time by 2.5 hours/week",
        category: Category::ProductivityImprovements,
    },
    SectionInfo {
        key: SectionKey::BrainstormingEfficiency,
        title: "Brainstorming Efficiency",
        description: "2.5x more productive brainstorming sessions",
        category: Category::ProductivityImprovements,
    },
    SectionInfo {
        key: SectionKey::OnboardingTimeReduction,
        title: "Faster Onboarding",
        description: "Reduce engineer onboarding by 2-3 days",
        category: Category::AdditionalBenefits,
    },
    SectionInfo {
        key: SectionKey::AdminTimeReduction,
        title: "Admin Time Reduction",
        description: "95% reduction in administrative tasks",
        category: Category::AdditionalBenefits,
    },
    SectionInfo {
        key: SectionKey::PipelineGeneration,
        title: "Pipeline Generation",
        description: "30-50% more time on pipeline activities",
        category: Category::AdditionalBenefits,
    },
];

impl SectionInfo {
    /// All nine sections in display order.
    pub fn catalog() -> &'static [SectionInfo] {
        &CATALOG
    }

    pub fn for_key(key: SectionKey) -> &'static SectionInfo {
        // CATALOG covers every SectionKey variant, so the lookup always hits.
        CATALOG
            .iter()
            .find(|info| info.key == key)
            .unwrap_or(&CATALOG[0])
    }

    /// What the section's card displays, given the current snapshot.
    pub fn card_value(&self, results: &RoiResults) -> CardValue {
        match self.key {
            SectionKey::MeetingEfficiency
            | SectionKey::MeetingReduction
            | SectionKey::SupportTimeReduction
            | SectionKey::BrainstormingEfficiency => CardValue::HoursAndDollars {
                hours: results.hours_for(self.key).unwrap_or(0.0),
                dollars: results.dollars_for(self.key),
            },
            SectionKey::VirtualEvents
            | SectionKey::WorkshopCollaboration
            | SectionKey::AdminTimeReduction => CardValue::Dollars {
                dollars: results.dollars_for(self.key),
            },
            SectionKey::OnboardingTimeReduction => CardValue::DollarsWithCount {
                dollars: results.onboarding_time_reduction.total_savings,
                count: results.onboarding_time_reduction.new_hires_per_year,
                count_label: "new hires/year",
            },
            SectionKey::PipelineGeneration => CardValue::DollarsWithCount {
                dollars: results.pipeline_generation.annual_increase,
                count: results.pipeline_generation.sales_reps,
                count_label: "sales reps",
            },
        }
    }
}

/// The value block on a benefit card. Sections with an hours component show
/// both the hours and their dollar value; the rest show dollars, optionally
/// with a head-count subtitle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardValue {
    HoursAndDollars { hours: f64, dollars: f64 },
    Dollars { dollars: f64 },
    DollarsWithCount { dollars: f64, count: u32, count_label: &'static str },
}

pub const KEY_ASSUMPTIONS: [&str; 6] = [
    "Calculations based on real customer data from case studies",
    "Not all users will experience every benefit category",
    "Results may vary based on organization size, industry, and implementation",
    "Conservative estimates used for percentage of users affected by each benefit",
    "Annual salary converted to hourly rate using 2,080 hours (40 hours/week × 52 weeks)",
    "Use the toggle controls to enable only the sections relevant to your organization",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::roi::RoiEngine;

    #[test]
    fn test_catalog_covers_every_section_once() {
        assert_eq!(SectionInfo::catalog().len(), SectionKey::ALL.len());
        for key in SectionKey::ALL {
            assert_eq!(
                SectionInfo::catalog().iter().filter(|info| info.key == key).count(),
                1
            );
            assert_eq!(SectionInfo::for_key(key).key, key);
        }
    }

    #[test]
    fn test_card_values_match_snapshot_shapes() {
        let engine = RoiEngine::new();
        let results = engine.results();

        let meeting = SectionInfo::for_key(SectionKey::MeetingEfficiency).card_value(results);
        assert_eq!(
            meeting,
            CardValue::HoursAndDollars {
                hours: results.meeting_efficiency.hours_per_year,
                dollars: results.meeting_efficiency.dollar_value,
            }
        );

        let events = SectionInfo::for_key(SectionKey::VirtualEvents).card_value(results);
        assert_eq!(
            events,
            CardValue::Dollars { dollars: results.virtual_events.cost_savings }
        );

        let onboarding =
            SectionInfo::for_key(SectionKey::OnboardingTimeReduction).card_value(results);
        assert_eq!(
            onboarding,
            CardValue::DollarsWithCount {
                dollars: results.onboarding_time_reduction.total_savings,
                count: results.onboarding_time_reduction.new_hires_per_year,
                count_label: "new hires/year",
            }
        );
    }
}
