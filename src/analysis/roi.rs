// src/analysis/roi.rs

use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RoiError {
    #[error("unknown section key: {0}")]
    UnknownSection(String),
}

/// One of the nine togglable benefit categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SectionKey {
    MeetingEfficiency,
    MeetingReduction,
    VirtualEvents,
    WorkshopCollaboration,
    SupportTimeReduction,
    BrainstormingEfficiency,
    OnboardingTimeReduction,
    AdminTimeReduction,
    PipelineGeneration,
}

impl SectionKey {
    pub const ALL: [SectionKey; 9] = [
        SectionKey::MeetingEfficiency,
        SectionKey::MeetingReduction,
        SectionKey::VirtualEvents,
        SectionKey::WorkshopCollaboration,
        SectionKey::SupportTimeReduction,
        SectionKey::BrainstormingEfficiency,
        SectionKey::OnboardingTimeReduction,
        SectionKey::AdminTimeReduction,
        SectionKey::PipelineGeneration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::MeetingEfficiency => "meetingEfficiency",
            SectionKey::MeetingReduction => "meetingReduction",
            SectionKey::VirtualEvents => "virtualEvents",
            SectionKey::WorkshopCollaboration => "workshopCollaboration",
            SectionKey::SupportTimeReduction => "supportTimeReduction",
            SectionKey::BrainstormingEfficiency => "brainstormingEfficiency",
            SectionKey::OnboardingTimeReduction => "onboardingTimeReduction",
            SectionKey::AdminTimeReduction => "adminTimeReduction",
            SectionKey::PipelineGeneration => "pipelineGeneration",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = RoiError;

    // Unknown identifiers are rejected rather than silently accepted;
    // the set of sections is closed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meetingEfficiency" => Ok(SectionKey::MeetingEfficiency),
            "meetingReduction" => Ok(SectionKey::MeetingReduction),
            "virtualEvents" => Ok(SectionKey::VirtualEvents),
            "workshopCollaboration" => Ok(SectionKey::WorkshopCollaboration),
            "supportTimeReduction" => Ok(SectionKey::SupportTimeReduction),
            "brainstormingEfficiency" => Ok(SectionKey::BrainstormingEfficiency),
            "onboardingTimeReduction" => Ok(SectionKey::OnboardingTimeReduction),
            "adminTimeReduction" => Ok(SectionKey::AdminTimeReduction),
            "pipelineGeneration" => Ok(SectionKey::PipelineGeneration),
            other => Err(RoiError::UnknownSection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TimeSavings {
    pub hours_per_year: f64,
    pub dollar_value: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TravelSavings {
    pub cost_savings: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct OnboardingSavings {
    pub new_hires_per_year: u32,
    pub total_savings: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminSavings {
    pub dollar_value: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PipelineGains {
    pub sales_reps: u32,
    pub annual_increase: f64,
}

/// One recompute's worth of derived metrics. Disabled sections are present
/// with zeroed fields so the aggregates never depend on which sections are
/// switched off.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct RoiResults {
    pub hourly_rate: f64,
    pub meeting_efficiency: TimeSavings,
    pub meeting_reduction: TimeSavings,
    pub virtual_events: TravelSavings,
    pub workshop_collaboration: TravelSavings,
    pub support_time_reduction: TimeSavings,
    pub brainstorming_efficiency: TimeSavings,
    pub onboarding_time_reduction: OnboardingSavings,
    pub admin_time_reduction: AdminSavings,
    pub pipeline_generation: PipelineGains,
    pub total_time_savings: f64,
    pub total_cost_savings: f64,
    pub total_roi: f64,
}

impl RoiResults {
    /// Annual hours saved by a section, for the four sections that have an
    /// hours component.
    pub fn hours_for(&self, key: SectionKey) -> Option<f64> {
        match key {
            SectionKey::MeetingEfficiency => Some(self.meeting_efficiency.hours_per_year),
            SectionKey::MeetingReduction => Some(self.meeting_reduction.hours_per_year),
            SectionKey::SupportTimeReduction => Some(self.support_time_reduction.hours_per_year),
            SectionKey::BrainstormingEfficiency => Some(self.brainstorming_efficiency.hours_per_year),
            _ => None,
        }
    }

    /// A section's dollar contribution. For PipelineGeneration this is the
    /// annual pipeline increase, which feeds total_roi but not
    /// total_cost_savings.
    pub fn dollars_for(&self, key: SectionKey) -> f64 {
        match key {
            SectionKey::MeetingEfficiency => self.meeting_efficiency.dollar_value,
            SectionKey::MeetingReduction => self.meeting_reduction.dollar_value,
            SectionKey::VirtualEvents => self.virtual_events.cost_savings,
            SectionKey::WorkshopCollaboration => self.workshop_collaboration.cost_savings,
            SectionKey::SupportTimeReduction => self.support_time_reduction.dollar_value,
            SectionKey::BrainstormingEfficiency => self.brainstorming_efficiency.dollar_value,
            SectionKey::OnboardingTimeReduction => self.onboarding_time_reduction.total_savings,
            SectionKey::AdminTimeReduction => self.admin_time_reduction.dollar_value,
            SectionKey::PipelineGeneration => self.pipeline_generation.annual_increase,
        }
    }
}

/// The calculation engine: input state plus the latest derived snapshot.
///
/// Mutation happens only through the setters, and every setter recomputes
/// inline, so `results()` is never stale. All inputs are silently clamped to
/// their domains; no setter has an error path.
#[derive(Debug, Clone)]
pub struct RoiEngine {
    users: u32,
    avg_salary: u32,
    enabled: HashMap<SectionKey, bool>,
    results: RoiResults,
}

impl RoiEngine {
    pub fn new() -> Self {
        let mut engine = Self {
            users: 10,
            avg_salary: 85_000,
            enabled: SectionKey::ALL.iter().map(|&key| (key, true)).collect(),
            results: RoiResults::default(),
        };
        engine.recompute();
        engine
    }

    pub fn users(&self) -> u32 {
        self.users
    }

    pub fn avg_salary(&self) -> u32 {
        self.avg_salary
    }

    pub fn results(&self) -> &RoiResults {
        &self.results
    }

    pub fn section_enabled(&self, key: SectionKey) -> bool {
        self.enabled.get(&key).copied().unwrap_or(true)
    }

    /// Clamps to [1, 10000] and recomputes.
    pub fn set_users(&mut self, value: i64) {
        self.users = value.clamp(1, 10_000) as u32;
        self.recompute();
    }

    /// Text-input variant: non-numeric input maps to 1.
    pub fn set_users_text(&mut self, text: &str) {
        self.set_users(text.trim().parse().unwrap_or(1));
    }

    /// Clamps to [30000, 500000] and recomputes.
    pub fn set_salary(&mut self, value: i64) {
        self.avg_salary = value.clamp(30_000, 500_000) as u32;
        self.recompute();
    }

    /// Text-input variant: non-numeric input maps to 30000.
    pub fn set_salary_text(&mut self, text: &str) {
        self.set_salary(text.trim().parse().unwrap_or(30_000));
    }

    pub fn set_section_enabled(&mut self, key: SectionKey, enabled: bool) {
        self.enabled.insert(key, enabled);
        self.recompute();
    }

    pub fn toggle_section(&mut self, key: SectionKey) {
        let flipped = !self.section_enabled(key);
        self.set_section_enabled(key, flipped);
    }

    /// Rebuilds the snapshot from the current inputs. Pure arithmetic over
    /// the clamped domains; the sections are independent of each other.
    pub fn recompute(&mut self) -> &RoiResults {
        let users = self.users as f64;
        let hourly_rate = self.avg_salary as f64 / 2080.0; // 40 hours/week * 52 weeks

        let meeting_efficiency = if self.section_enabled(SectionKey::MeetingEfficiency) {
            let hours = users * 10.0;
            TimeSavings { hours_per_year: hours, dollar_value: hours * hourly_rate }
        } else {
            TimeSavings::default()
        };

        let meeting_reduction = if self.section_enabled(SectionKey::MeetingReduction) {
            let hours = users * 50.0;
            TimeSavings { hours_per_year: hours, dollar_value: hours * hourly_rate }
        } else {
            TimeSavings::default()
        };

        let virtual_events = if self.section_enabled(SectionKey::VirtualEvents) {
            // 30% of users attend events
            TravelSavings { cost_savings: users * 0.3 * 2000.0 }
        } else {
            TravelSavings::default()
        };

        let workshop_collaboration = if self.section_enabled(SectionKey::WorkshopCollaboration) {
            // 20% do international travel
            TravelSavings { cost_savings: users * 0.2 * 3500.0 * 0.5 }
        } else {
            TravelSavings::default()
        };

        let support_time_reduction = if self.section_enabled(SectionKey::SupportTimeReduction) {
            let hours = users * 2.5 * 52.0;
            TimeSavings { hours_per_year: hours, dollar_value: hours * hourly_rate }
        } else {
            TimeSavings::default()
        };

        let brainstorming_efficiency = if self.section_enabled(SectionKey::BrainstormingEfficiency) {
            // 50% productivity gain on 8 hours/month of sessions
            let hours = users * 8.0 * 12.0 * 0.5;
            TimeSavings { hours_per_year: hours, dollar_value: hours * hourly_rate }
        } else {
            TimeSavings::default()
        };

        let onboarding_time_reduction = if self.section_enabled(SectionKey::OnboardingTimeReduction) {
            // 15% turnover/growth
            let new_hires = (users * 0.15).ceil() as u32;
            OnboardingSavings {
                new_hires_per_year: new_hires,
                total_savings: new_hires as f64 * 2560.0,
            }
        } else {
            OnboardingSavings::default()
        };

        let admin_time_reduction = if self.section_enabled(SectionKey::AdminTimeReduction) {
            // 1% are admins
            AdminSavings { dollar_value: users * 0.01 * 11.0 * 52.0 * hourly_rate }
        } else {
            AdminSavings::default()
        };

        let pipeline_generation = if self.section_enabled(SectionKey::PipelineGeneration) {
            // 5% are sales reps
            let sales_reps = (users * 0.05).ceil() as u32;
            PipelineGains {
                sales_reps,
                annual_increase: sales_reps as f64 * 75_000.0 * 0.4 * 12.0,
            }
        } else {
            PipelineGains::default()
        };

        let total_time_savings = meeting_efficiency.hours_per_year
            + meeting_reduction.hours_per_year
            + support_time_reduction.hours_per_year
            + brainstorming_efficiency.hours_per_year;

        let total_cost_savings = meeting_efficiency.dollar_value
            + meeting_reduction.dollar_value
            + virtual_events.cost_savings
            + workshop_collaboration.cost_savings
            + support_time_reduction.dollar_value
            + brainstorming_efficiency.dollar_value
            + onboarding_time_reduction.total_savings
            + admin_time_reduction.dollar_value;

        // Pipeline increase counts once, on top of the cost savings.
        let total_roi = total_cost_savings + pipeline_generation.annual_increase;

        self.results = RoiResults {
            hourly_rate,
            meeting_efficiency,
            meeting_reduction,
            virtual_events,
            workshop_collaboration,
            support_time_reduction,
            brainstorming_efficiency,
            onboarding_time_reduction,
            admin_time_reduction,
            pipeline_generation,
            total_time_savings,
            total_cost_savings,
            total_roi,
        };
        &self.results
    }
}

impl Default for RoiEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_default_scenario_matches_known_values() {
        let engine = RoiEngine::new();
        let results = engine.results();

        assert_close(results.hourly_rate, 85_000.0 / 2080.0);
        assert_close(results.meeting_efficiency.hours_per_year, 100.0);
        assert_close(results.meeting_efficiency.dollar_value, 100.0 * 85_000.0 / 2080.0);
        assert_close(results.meeting_reduction.hours_per_year, 500.0);
        assert_close(results.meeting_reduction.dollar_value, 500.0 * 85_000.0 / 2080.0);
        assert_close(results.virtual_events.cost_savings, 6000.0);
        assert_close(results.workshop_collaboration.cost_savings, 3500.0);
        assert_close(results.support_time_reduction.hours_per_year, 1300.0);
        assert_close(results.brainstorming_efficiency.hours_per_year, 480.0);
        assert_eq!(results.onboarding_time_reduction.new_hires_per_year, 2);
        assert_close(results.onboarding_time_reduction.total_savings, 5120.0);
        assert_eq!(results.pipeline_generation.sales_reps, 1);
        assert_close(results.pipeline_generation.annual_increase, 360_000.0);
    }

    #[test]
    fn test_total_identity_across_domain() {
        for users in [1_i64, 7, 10, 999, 10_000] {
            for salary in [30_000_i64, 85_000, 123_456, 500_000] {
                let mut engine = RoiEngine::new();
                engine.set_users(users);
                engine.set_salary(salary);
                let r = engine.results();

                assert_eq!(
                    r.total_roi,
                    r.total_cost_savings + r.pipeline_generation.annual_increase
                );
                assert_close(
                    r.total_time_savings,
                    r.meeting_efficiency.hours_per_year
                        + r.meeting_reduction.hours_per_year
                        + r.support_time_reduction.hours_per_year
                        + r.brainstorming_efficiency.hours_per_year,
                );
                for key in SectionKey::ALL {
                    assert!(r.dollars_for(key) >= 0.0);
                    if let Some(hours) = r.hours_for(key) {
                        assert!(hours >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_disabling_zeroes_exactly_that_section() {
        for disabled_key in SectionKey::ALL {
            let mut engine = RoiEngine::new();
            let before = *engine.results();
            let dollars = before.dollars_for(disabled_key);
            let hours = before.hours_for(disabled_key).unwrap_or(0.0);

            engine.set_section_enabled(disabled_key, false);
            let after = *engine.results();

            assert_eq!(after.dollars_for(disabled_key), 0.0);
            assert_eq!(after.hours_for(disabled_key).unwrap_or(0.0), 0.0);

            // Every other section is untouched.
            for other in SectionKey::ALL {
                if other == disabled_key {
                    continue;
                }
                assert_eq!(before.dollars_for(other), after.dollars_for(other));
                assert_eq!(before.hours_for(other), after.hours_for(other));
            }

            // Aggregates drop by exactly the prior contribution.
            assert_close(before.total_time_savings - after.total_time_savings, hours);
            if disabled_key == SectionKey::PipelineGeneration {
                assert_eq!(before.total_cost_savings, after.total_cost_savings);
                assert_close(before.total_roi - after.total_roi, dollars);
            } else {
                assert_close(before.total_cost_savings - after.total_cost_savings, dollars);
                assert_close(before.total_roi - after.total_roi, dollars);
            }
        }
    }

    #[test]
    fn test_toggle_round_trip_restores_snapshot() {
        for key in SectionKey::ALL {
            let mut engine = RoiEngine::new();
            engine.set_users(137);
            engine.set_salary(91_000);
            let original = *engine.results();

            engine.toggle_section(key);
            assert_ne!(original, *engine.results());
            engine.toggle_section(key);
            assert_eq!(original, *engine.results());
        }
    }

    #[test]
    fn test_users_clamping() {
        let mut engine = RoiEngine::new();

        engine.set_users(-5);
        assert_eq!(engine.users(), 1);
        engine.set_users(999_999);
        assert_eq!(engine.users(), 10_000);
        engine.set_users_text("abc");
        assert_eq!(engine.users(), 1);
        engine.set_users_text("  42 ");
        assert_eq!(engine.users(), 42);
        engine.set_users_text("");
        assert_eq!(engine.users(), 1);
    }

    #[test]
    fn test_salary_clamping() {
        let mut engine = RoiEngine::new();

        engine.set_salary(10);
        assert_eq!(engine.avg_salary(), 30_000);
        engine.set_salary(10_000_000);
        assert_eq!(engine.avg_salary(), 500_000);
        engine.set_salary_text("oops");
        assert_eq!(engine.avg_salary(), 30_000);
        engine.set_salary_text("120000");
        assert_eq!(engine.avg_salary(), 120_000);
    }

    #[test]
    fn test_setters_recompute_inline() {
        let mut engine = RoiEngine::new();
        engine.set_users(100);
        assert_close(engine.results().meeting_efficiency.hours_per_year, 1000.0);

        engine.set_salary(104_000);
        assert_close(engine.results().hourly_rate, 50.0);

        engine.set_section_enabled(SectionKey::VirtualEvents, false);
        assert_eq!(engine.results().virtual_events.cost_savings, 0.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut engine = RoiEngine::new();
        engine.set_users(321);
        engine.set_salary(76_500);

        let first = *engine.recompute();
        let second = *engine.recompute();
        assert_eq!(first, second);
    }

    #[test]
    fn test_headcount_rounding_boundaries() {
        let mut engine = RoiEngine::new();

        // ceil() applies to the fractional head counts.
        engine.set_users(1);
        assert_eq!(engine.results().onboarding_time_reduction.new_hires_per_year, 1);
        assert_close(engine.results().onboarding_time_reduction.total_savings, 2560.0);
        assert_eq!(engine.results().pipeline_generation.sales_reps, 1);

        engine.set_users(20);
        assert_eq!(engine.results().onboarding_time_reduction.new_hires_per_year, 3);
        assert_close(engine.results().onboarding_time_reduction.total_savings, 7680.0);
        assert_eq!(engine.results().pipeline_generation.sales_reps, 1);

        engine.set_users(21);
        assert_eq!(engine.results().pipeline_generation.sales_reps, 2);
        assert_close(engine.results().pipeline_generation.annual_increase, 720_000.0);
    }

    #[test]
    fn test_section_key_parse_round_trip() {
        for key in SectionKey::ALL {
            assert_eq!(key.as_str().parse::<SectionKey>(), Ok(key));
        }
        assert_eq!(
            "notASection".parse::<SectionKey>(),
            Err(RoiError::UnknownSection("notASection".to_string()))
        );
    }

    #[test]
    fn test_results_serialization() {
        let engine = RoiEngine::new();
        let json = serde_json::to_string(engine.results()).unwrap();
        let parsed: RoiResults = serde_json::from_str(&json).unwrap();
        assert_eq!(*engine.results(), parsed);
    }
}
