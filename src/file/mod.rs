// src/file/mod.rs
use anyhow::{Result, Context};
use chrono::prelude::*;
use csv::Writer;
use std::path::Path;

use crate::analysis::RoiEngine;
use crate::config::SectionInfo;

/// Writes the current scenario and snapshot as a CSV report: the inputs,
/// one row per section, and the three totals.
pub fn write_csv_report(path: &Path, engine: &RoiEngine) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    let results = engine.results();

    let generated = Utc::now().to_rfc3339();
    let users = engine.users().to_string();
    let salary = engine.avg_salary().to_string();
    let hourly = format!("{:.2}", results.hourly_rate);
    writer.write_record(["generated", generated.as_str(), "", ""])?;
    writer.write_record(["users", users.as_str(), "", ""])?;
    writer.write_record(["avg_salary", salary.as_str(), "", ""])?;
    writer.write_record(["hourly_rate", hourly.as_str(), "", ""])?;

    writer.write_record(["section", "enabled", "hours_per_year", "dollar_value"])?;
    for info in SectionInfo::catalog() {
        let hours = results
            .hours_for(info.key)
            .map(|h| format!("{:.0}", h))
            .unwrap_or_default();
        let dollars = format!("{:.2}", results.dollars_for(info.key));
        writer.write_record([
            info.key.as_str(),
            if engine.section_enabled(info.key) { "true" } else { "false" },
            hours.as_str(),
            dollars.as_str(),
        ])?;
    }

    let total_hours = format!("{:.0}", results.total_time_savings);
    let total_cost = format!("{:.2}", results.total_cost_savings);
    let total_roi = format!("{:.2}", results.total_roi);
    writer.write_record(["totalTimeSavings", "", total_hours.as_str(), ""])?;
    writer.write_record(["totalCostSavings", "", "", total_cost.as_str()])?;
    writer.write_record(["totalROI", "", "", total_roi.as_str()])?;

    writer
        .flush()
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SectionKey;
    use tempfile::TempDir;

    #[test]
    fn test_csv_report_contains_sections_and_totals() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roi_report.csv");

        let mut engine = RoiEngine::new();
        engine.set_section_enabled(SectionKey::VirtualEvents, false);
        write_csv_report(&path, &engine).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        for key in SectionKey::ALL {
            assert!(content.contains(key.as_str()), "missing row for {}", key);
        }
        assert!(content.contains("users,10"));
        assert!(content.contains("avg_salary,85000"));
        assert!(content.contains("virtualEvents,false,,0.00"));
        assert!(content.contains("totalROI"));
    }

    #[test]
    fn test_csv_report_fails_on_bad_path() {
        let engine = RoiEngine::new();
        let result = write_csv_report(Path::new("/nonexistent-dir/report.csv"), &engine);
        assert!(result.is_err());
    }
}
