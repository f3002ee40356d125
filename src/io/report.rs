//! Search result reports

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::parse::encode_state;
use crate::engine::MoveResult;
use crate::error::{Error, Result};
use crate::state::GameState;

/// Output format for report files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// One solved test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Encoded input state
    pub input: String,
    pub best_move: Option<u32>,
    pub value: f64,
    pub nodes_visited: u64,
    pub nodes_evaluated: u64,
    pub max_depth_reached: u32,
    pub pruned: u64,
    pub effective_branching_factor: f64,
    pub time_ms: u64,
}

impl Report {
    pub fn new(state: &GameState, result: &MoveResult) -> Self {
        Self {
            input: encode_state(state),
            best_move: result.best_move,
            value: result.value,
            nodes_visited: result.stats.nodes_visited,
            nodes_evaluated: result.stats.nodes_evaluated,
            max_depth_reached: result.stats.max_depth_reached,
            pruned: result.stats.pruned,
            effective_branching_factor: result.stats.effective_branching_factor(),
            time_ms: result.time_ms,
        }
    }

    /// Human-readable report with `precision` decimals for real values.
    pub fn render_text(&self, precision: usize) -> String {
        let best_move = self
            .best_move
            .map_or_else(|| "none".to_string(), |m| m.to_string());

        let mut out = String::new();
        let _ = writeln!(out, "Input: {}", self.input);
        let _ = writeln!(out, "Move: {best_move}");
        let _ = writeln!(out, "Value: {:.precision$}", self.value);
        let _ = writeln!(out, "Number of Nodes Visited: {}", self.nodes_visited);
        let _ = writeln!(out, "Number of Nodes Evaluated: {}", self.nodes_evaluated);
        let _ = writeln!(out, "Max Depth Reached: {}", self.max_depth_reached);
        let _ = writeln!(out, "Branches Pruned: {}", self.pruned);
        let _ = write!(
            out,
            "Avg Effective Branching Factor: {:.precision$}",
            self.effective_branching_factor
        );
        out
    }
}

/// Render a batch of reports in the requested format.
pub fn render_reports(reports: &[Report], format: ReportFormat, precision: usize) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(reports
            .iter()
            .map(|r| r.render_text(precision))
            .collect::<Vec<_>>()
            .join("\n\n")),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}

/// Write a batch of reports to `path`.
pub fn write_reports(
    path: &Path,
    reports: &[Report],
    format: ReportFormat,
    precision: usize,
) -> Result<()> {
    let mut contents = render_reports(reports, format, precision)?;
    contents.push('\n');
    fs::write(path, contents).map_err(|err| Error::io(format!("write {}", path.display()), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Solver;

    fn three_token_report() -> Report {
        let state = GameState::new(3, 0);
        let result = Solver::new().solve(&state);
        Report::new(&state, &result)
    }

    #[test]
    fn test_report_fields() {
        let report = three_token_report();
        assert_eq!(report.input, "TakeTokens 3 0 0");
        assert_eq!(report.best_move, Some(1));
        assert_eq!(report.value, -1.0);
        assert_eq!(report.nodes_visited, 4);
        assert_eq!(report.nodes_evaluated, 2);
        assert_eq!(report.max_depth_reached, 2);
        assert_eq!(report.effective_branching_factor, 1.5);
    }

    #[test]
    fn test_render_text() {
        let text = three_token_report().render_text(3);
        assert!(text.contains("Move: 1\n"));
        assert!(text.contains("Value: -1.000\n"));
        assert!(text.contains("Number of Nodes Visited: 4\n"));
        assert!(text.contains("Number of Nodes Evaluated: 2\n"));
        assert!(text.contains("Max Depth Reached: 2\n"));
        assert!(text.ends_with("Avg Effective Branching Factor: 1.500"));
    }

    #[test]
    fn test_render_text_without_move() {
        let state = GameState::new(1, 0);
        let report = Report::new(&state, &Solver::new().solve(&state));
        assert!(report.render_text(1).contains("Move: none"));
    }

    #[test]
    fn test_render_json() {
        let reports = vec![three_token_report()];
        let json = render_reports(&reports, ReportFormat::Json, 3).unwrap();
        let parsed: Vec<Report> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].best_move, Some(1));
        assert_eq!(parsed[0].nodes_visited, 4);
    }
}
