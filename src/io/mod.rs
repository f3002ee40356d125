//! Text boundary of the engine
//!
//! - [`parse`]: test-case lines into game states
//! - [`report`]: search results into text or JSON reports
//! - [`generate`]: random test cases

pub mod generate;
pub mod parse;
pub mod report;

pub use generate::{generate_case, generate_cases, GeneratorConfig};
pub use parse::{encode_state, load_test_cases, parse_state_line, parse_test_cases, read_test_cases};
pub use report::{render_reports, write_reports, Report, ReportFormat};
