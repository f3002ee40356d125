//! Test-case line parsing
//!
//! A test case is one line of the form
//!
//! ```text
//! TakeTokens <totalTokens> <numTaken> [<token> ...] <maxDepth>
//! ```
//!
//! where `PNT Player` may be used instead of `TakeTokens` and exactly
//! `numTaken` tokens are listed, in the order they were taken.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::state::GameState;

/// Accepted leading keywords
const PREFIXES: [&str; 2] = ["PNT Player", "TakeTokens"];

/// Keyword used when encoding states
const ENCODE_PREFIX: &str = "TakeTokens";

/// Parse a single test-case line.
pub fn parse_state_line(line: &str) -> Result<GameState> {
    let trimmed = line.trim();
    let rest = PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .ok_or_else(|| Error::malformed(line, "expected 'PNT Player' or 'TakeTokens'"))?;

    if !rest.starts_with(char::is_whitespace) {
        return Err(Error::malformed(line, "missing fields after keyword"));
    }

    let fields = rest
        .split_whitespace()
        .map(|field| {
            field
                .parse::<i64>()
                .map_err(|_| Error::malformed(line, format!("'{field}' is not an integer")))
        })
        .collect::<Result<Vec<i64>>>()?;

    let [total, num_taken, .., max_depth] = fields[..] else {
        return Err(Error::malformed(
            line,
            "expected <totalTokens> <numTaken> [<token> ...] <maxDepth>",
        ));
    };

    let total = u32::try_from(total)
        .ok()
        .filter(|&t| t > 0)
        .ok_or_else(|| Error::malformed(line, "totalTokens must be a positive integer"))?;
    let num_taken = usize::try_from(num_taken)
        .map_err(|_| Error::malformed(line, "numTaken must not be negative"))?;
    let max_depth = i32::try_from(max_depth)
        .map_err(|_| Error::malformed(line, "maxDepth is out of range"))?;

    let listed = &fields[2..fields.len() - 1];
    if listed.len() != num_taken {
        return Err(Error::malformed(
            line,
            format!("numTaken is {num_taken} but {} tokens are listed", listed.len()),
        ));
    }

    let taken = listed
        .iter()
        .map(|&t| {
            u32::try_from(t).map_err(|_| Error::malformed(line, format!("invalid token {t}")))
        })
        .collect::<Result<Vec<u32>>>()?;

    GameState::with_taken(total, taken, max_depth)
        .map_err(|err| Error::malformed(line, err.to_string()))
}

/// Encode a state as a test-case line.
pub fn encode_state(state: &GameState) -> String {
    let mut fields = vec![
        ENCODE_PREFIX.to_string(),
        state.total_tokens().to_string(),
        state.num_taken().to_string(),
    ];
    fields.extend(state.taken_tokens().iter().map(u32::to_string));
    fields.push(state.max_depth().to_string());
    fields.join(" ")
}

/// Parse every well-formed line from `reader`; malformed lines are skipped.
pub fn parse_test_cases<R: BufRead>(reader: R) -> Result<Vec<GameState>> {
    let mut states = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| Error::io("read test case line", err))?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_state_line(&line) {
            Ok(state) => states.push(state),
            Err(err) => debug!(line = index + 1, %err, "skipping test case line"),
        }
    }

    Ok(states)
}

/// Read test cases from a file.
///
/// A missing file is reported as [`Error::NoInputAvailable`].
pub fn read_test_cases(path: &Path) -> Result<Vec<GameState>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::NoInputAvailable {
            path: path.display().to_string(),
        },
        _ => Error::io(format!("open {}", path.display()), err),
    })?;

    parse_test_cases(BufReader::new(file))
}

/// Read test cases, treating a missing file as zero test cases.
pub fn load_test_cases(path: &Path) -> Result<Vec<GameState>> {
    match read_test_cases(path) {
        Err(err @ Error::NoInputAvailable { .. }) => {
            warn!(%err, "continuing with zero test cases");
            Ok(Vec::new())
        }
        other => other,
    }
}
