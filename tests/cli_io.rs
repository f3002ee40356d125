//! File and session round trips through the command layer

use std::fs;
use std::io::Write;

use pnt::cli::commands::generate::generate_lines;
use pnt::cli::commands::interactive::run_session;
use pnt::cli::commands::solve::solve_cases;
use pnt::config::EngineConfig;
use pnt::io::{load_test_cases, read_test_cases, write_reports, GeneratorConfig, Report, ReportFormat};
use pnt::{Error, Solver};
use tempfile::{tempdir, NamedTempFile};

const CASES: &str = "\
TakeTokens 3 0 0
PNT Player 7 1 1 2
this line is ignored
TakeTokens 7 0 1
";

#[test]
fn test_solve_file_to_text_report() {
    let mut input = NamedTempFile::new().unwrap();
    input.write_all(CASES.as_bytes()).unwrap();

    let states = read_test_cases(input.path()).unwrap();
    assert_eq!(states.len(), 3);

    let reports = solve_cases(&states, &Solver::new());
    let dir = tempdir().unwrap();
    let output = dir.path().join("results.txt");
    write_reports(&output, &reports, ReportFormat::Text, 3).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let blocks: Vec<_> = text.trim_end().split("\n\n").collect();
    assert_eq!(blocks.len(), 3);
    assert!(blocks[0].starts_with("Input: TakeTokens 3 0 0\nMove: 1\nValue: -1.000\n"));
    assert!(blocks[1].starts_with("Input: TakeTokens 7 1 1 2\n"));
    assert!(blocks[2].contains("Number of Nodes Visited: 3\n"));
    assert!(blocks[2].contains("Number of Nodes Evaluated: 2\n"));
}

#[test]
fn test_solve_file_to_json_report() {
    let mut input = NamedTempFile::new().unwrap();
    input.write_all(CASES.as_bytes()).unwrap();

    let states = load_test_cases(input.path()).unwrap();
    let config = EngineConfig::default().with_parallel(true);
    let reports = solve_cases(&states, &Solver::from_config(&config));

    let dir = tempdir().unwrap();
    let output = dir.path().join("results.json");
    write_reports(&output, &reports, ReportFormat::Json, 3).unwrap();

    let parsed: Vec<Report> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(parsed.len(), reports.len());
    for (p, r) in parsed.iter().zip(&reports) {
        assert_eq!(p.input, r.input);
        assert_eq!(p.best_move, r.best_move);
        assert_eq!(p.nodes_visited, r.nodes_visited);
    }
    assert_eq!(parsed[0].best_move, Some(1));
    assert_eq!(parsed[0].value, -1.0);
}

#[test]
fn test_missing_input_is_zero_cases() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nothing.txt");
    assert!(matches!(
        read_test_cases(&missing),
        Err(Error::NoInputAvailable { .. })
    ));
    assert!(load_test_cases(&missing).unwrap().is_empty());
}

#[test]
fn test_generated_cases_solve() {
    let config = GeneratorConfig {
        min_tokens: 3,
        max_tokens: 10,
        max_depth: 3,
    };
    let lines = generate_lines(15, Some(99), &config).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", lines.join("\n")).unwrap();

    let states = read_test_cases(file.path()).unwrap();
    assert_eq!(states.len(), 15);
    for report in solve_cases(&states, &Solver::new()) {
        assert!(report.value.abs() <= 1.0);
        assert!(report.nodes_evaluated <= report.nodes_visited);
    }
}

#[test]
fn test_interactive_session() {
    let input = "TakeTokens 3 0 0\nTakeTokens 3\nPNT Player 3 1 1 0\nquit\nTakeTokens 5 0 0\n";
    let mut output = Vec::new();
    let solved = run_session(input.as_bytes(), &mut output, &Solver::new(), 3, false).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(solved, 2);
    assert_eq!(output.matches("Could not read test case").count(), 1);
    assert!(!output.contains("Input: PNT Player"));
    assert!(output.contains("Input: TakeTokens 3 1 1 0"));
    assert!(!output.contains("TakeTokens 5"));
}
