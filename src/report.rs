//! Human-readable and JSON renderings of a comparison

use std::fmt;

use serde::Serialize;

use crate::compare::{ComparisonVerdict, SweepEntry};
use crate::config::RunConfig;
use crate::error::Result;

pub const DETECTED: &str = "border effect detected";
pub const NOT_DETECTED: &str = "no border effect detected";

pub fn verdict_line(degraded: bool) -> &'static str {
    if degraded { DETECTED } else { NOT_DETECTED }
}

/// Single-run report; `Display` gives the console text
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub config: &'a RunConfig,
    pub verdict: &'a ComparisonVerdict,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a RunConfig, verdict: &'a ComparisonVerdict) -> Self {
        Self { config, verdict }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.verdict;
        writeln!(f, "Using offset: {}", self.config.far_offset)?;
        writeln!(f, "Results:")?;
        writeln!(f, "  normal horizontal diff: {:.6}", v.normal.horizontal_diff)?;
        writeln!(f, "  far horizontal diff:    {:.6}", v.far.horizontal_diff)?;
        writeln!(f, "  horizontal diff ratio:  {:.2}x", v.ratios.horizontal_diff)?;
        writeln!(f, "  normal vertical diff:   {:.6}", v.normal.vertical_diff)?;
        writeln!(f, "  far vertical diff:      {:.6}", v.far.vertical_diff)?;
        writeln!(f, "  vertical diff ratio:    {:.2}x", v.ratios.vertical_diff)?;
        writeln!(f, "  normal range:           {:.6}", v.normal.range)?;
        writeln!(f, "  far range:              {:.6}", v.far.range)?;
        writeln!(f, "  range ratio:            {:.2}x", v.ratios.range)?;
        writeln!(f, "  normal entropy:         {:.6}", v.normal.entropy)?;
        writeln!(f, "  far entropy:            {:.6}", v.far.entropy)?;
        writeln!(f, "  entropy ratio:          {:.2}x", v.ratios.entropy)?;
        writeln!(f)?;
        write!(f, "{}", verdict_line(v.degraded))
    }
}

/// Offset sweep report, one row per far offset
#[derive(Debug, Serialize)]
pub struct SweepReport<'a> {
    pub config: &'a RunConfig,
    pub entries: &'a [SweepEntry],
}

impl<'a> SweepReport<'a> {
    pub fn new(config: &'a RunConfig, entries: &'a [SweepEntry]) -> Self {
        Self { config, entries }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SweepReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>14}  {:>8}  {:>8}  {:>8}  {:>8}  verdict",
            "offset", "h-diff", "v-diff", "range", "entropy"
        )?;
        for entry in self.entries {
            let r = &entry.verdict.ratios;
            writeln!(
                f,
                "{:>14e}  {:>7.2}x  {:>7.2}x  {:>7.2}x  {:>7.2}x  {}",
                entry.far_offset,
                r.horizontal_diff,
                r.vertical_diff,
                r.range,
                r.entropy,
                verdict_line(entry.verdict.degraded)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FieldStatistics;
    use crate::compare::Ratios;

    fn verdict(degraded: bool) -> ComparisonVerdict {
        let stats = FieldStatistics {
            horizontal_diff: 0.0773279,
            vertical_diff: 0.076273,
            range: 2.0,
            entropy: 2.5202047,
        };
        ComparisonVerdict {
            normal: stats,
            far: stats,
            ratios: Ratios {
                horizontal_diff: 1.0,
                vertical_diff: 1.0,
                range: 1.0,
                entropy: 0.9996,
            },
            degraded,
        }
    }

    #[test]
    fn test_text_report() {
        let config = RunConfig::default();
        let v = verdict(false);
        let text = Report::new(&config, &v).to_string();

        assert!(text.starts_with("Using offset: 100000000\n"));
        assert!(text.contains("normal horizontal diff: 0.077328"));
        assert!(text.contains("normal entropy:         2.520205"));
        assert!(text.contains("entropy ratio:          1.00x"));
        assert!(text.ends_with(NOT_DETECTED));
    }

    #[test]
    fn test_verdict_lines() {
        let config = RunConfig::default();
        let v = verdict(true);
        assert!(Report::new(&config, &v).to_string().ends_with("\nborder effect detected"));
    }

    #[test]
    fn test_json_report() {
        let config = RunConfig::default();
        let v = verdict(true);
        let text = Report::new(&config, &v).to_json().unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["config"]["grid_size"], 100);
        assert_eq!(json["config"]["generator"], "java");
        assert_eq!(json["verdict"]["degraded"], true);
        assert_eq!(json["verdict"]["normal"]["range"], 2.0);
    }

    #[test]
    fn test_sweep_report_rows() {
        let config = RunConfig::default();
        let entries = [
            SweepEntry { far_offset: 1e4, verdict: verdict(false) },
            SweepEntry { far_offset: 4.5e15, verdict: verdict(true) },
        ];
        let text = SweepReport::new(&config, &entries).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("1e4"));
        assert!(lines[1].ends_with(NOT_DETECTED));
        assert!(lines[2].ends_with(DETECTED) && !lines[2].ends_with(NOT_DETECTED));
    }
}
