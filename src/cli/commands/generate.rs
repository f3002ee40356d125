//! Generate command - Write random test cases

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config::EngineConfig;
use crate::io::{encode_state, generate_cases, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(about = "Generate random test cases")]
pub struct GenerateArgs {
    /// Number of test cases
    #[arg(long, short = 'n', default_value_t = 10)]
    pub count: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest token pool (defaults to the configured value)
    #[arg(long)]
    pub min_tokens: Option<u32>,

    /// Largest token pool (defaults to the configured value)
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Largest depth ceiling (defaults to the configured value)
    #[arg(long)]
    pub max_depth: Option<i32>,

    /// Write the test cases to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    fn generator_config(&self, base: &GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            min_tokens: self.min_tokens.unwrap_or(base.min_tokens),
            max_tokens: self.max_tokens.unwrap_or(base.max_tokens),
            max_depth: self.max_depth.unwrap_or(base.max_depth),
        }
    }
}

/// Generate test cases as encoded lines.
pub fn generate_lines(count: usize, seed: Option<u64>, config: &GeneratorConfig) -> crate::Result<Vec<String>> {
    Ok(generate_cases(count, seed, config)?
        .iter()
        .map(encode_state)
        .collect())
}

pub fn execute(args: GenerateArgs, config: &EngineConfig) -> Result<()> {
    let generator = args.generator_config(&config.generator);
    let lines = generate_lines(args.count, args.seed, &generator)
        .context("failed to generate test cases")?;

    match &args.output {
        Some(path) => {
            let mut contents = lines.join("\n");
            contents.push('\n');
            fs::write(path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(count = lines.len(), output = %path.display(), "test cases written");
        }
        None => {
            for line in &lines {
                println!("{line}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_state_line;

    #[test]
    fn test_generated_lines_parse() {
        let lines = generate_lines(25, Some(11), &GeneratorConfig::default()).unwrap();
        assert_eq!(lines.len(), 25);
        for line in &lines {
            assert!(line.starts_with("TakeTokens "));
            assert!(parse_state_line(line).is_ok(), "{line}");
        }
    }

    #[test]
    fn test_args_override_config() {
        let args = GenerateArgs {
            count: 1,
            seed: None,
            min_tokens: Some(5),
            max_tokens: None,
            max_depth: Some(0),
            output: None,
        };
        let config = args.generator_config(&GeneratorConfig::default());
        assert_eq!(config.min_tokens, 5);
        assert_eq!(config.max_tokens, 12);
        assert_eq!(config.max_depth, 0);
    }
}
