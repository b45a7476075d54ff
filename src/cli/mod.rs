//! Command-line interface for estimate extraction.
//!
//! Single texts go through `extract`; JSON arrays of issue records go
//! through `batch` and `summary`.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use crate::config::PlannerConfig;
use crate::estimation::Estimator;
use crate::report;

#[derive(Parser, Debug)]
#[command(name = "hourhand")]
#[command(version, about = "Pulls time estimates out of issue text for weekly planning")]
pub struct Cli {
    /// Planner config file (default: ./config.yaml when present)
    #[arg(short, long, global = true, env = "HOURHAND_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the estimated hours for one piece of issue text
    Extract {
        /// Issue text; read from stdin when omitted
        text: Option<String>,
    },

    /// Enrich a JSON array of issues with estimated_hours
    Batch {
        /// Input JSON file; stdin when omitted
        input: Option<PathBuf>,

        /// Write enriched JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the active extraction patterns in precedence order
    Patterns,

    /// Print a plain-text summary of estimated issues
    Summary {
        /// Input JSON file; stdin when omitted
        input: Option<PathBuf>,
    },
}

/// Run a parsed invocation.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = PlannerConfig::resolve(cli.config.as_deref())?;
    let estimator = Estimator::new(&config.weekly_planner)?;

    match cli.command {
        Command::Extract { text } => extract_one(&estimator, text),
        Command::Batch { input, output } => {
            run_batch(&estimator, input.as_deref(), output.as_deref())
        }
        Command::Patterns => show_patterns(&estimator),
        Command::Summary { input } => summarize(&estimator, input.as_deref()),
    }
}

/// Estimate a single text and print the hours.
fn extract_one(estimator: &Estimator, text: Option<String>) -> anyhow::Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_stdin()?,
    };

    println!("{}", estimator.extract(Some(&text)));
    Ok(())
}

/// Enrich a batch of issue records and emit them as JSON.
fn run_batch(
    estimator: &Estimator,
    input: Option<&Path>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let issues = read_issues(input)?;
    let enriched = estimator.batch_extract(&issues);
    let rendered = serde_json::to_string_pretty(&enriched)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered + "\n")
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::debug!(
                "wrote {} enriched issues to {}",
                enriched.len(),
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Print the compiled patterns, one per line.
fn show_patterns(estimator: &Estimator) -> anyhow::Result<()> {
    for pattern in estimator.patterns() {
        println!("{}", pattern.as_str());
    }
    Ok(())
}

/// Estimate a batch and print the plain-text summary.
fn summarize(estimator: &Estimator, input: Option<&Path>) -> anyhow::Result<()> {
    let issues = read_issues(input)?;
    let enriched = estimator.batch_extract(&issues);

    println!("{}", report::render_summary(&enriched));
    Ok(())
}

/// Read a JSON array of issue records from a file or stdin.
fn read_issues(input: Option<&Path>) -> anyhow::Result<Vec<serde_json::Value>> {
    let content = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => read_stdin()?,
    };

    serde_json::from_str(&content).context("input must be a JSON array of issue records")
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parses_extract_with_inline_text() {
        let cli = Cli::try_parse_from(["hourhand", "extract", "Time: 3h"]).unwrap();

        match cli.command {
            Command::Extract { text } => assert_eq!(text.as_deref(), Some("Time: 3h")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parses_batch_with_output_flag() {
        let cli =
            Cli::try_parse_from(["hourhand", "batch", "issues.json", "--output", "out.json"])
                .unwrap();

        match cli.command {
            Command::Batch { input, output } => {
                assert_eq!(input, Some(PathBuf::from("issues.json")));
                assert_eq!(output, Some(PathBuf::from("out.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_config_flag_works_after_subcommand() {
        let cli =
            Cli::try_parse_from(["hourhand", "patterns", "--config", "custom.yaml"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
    }

    #[test]
    fn test_read_issues_from_file() {
        let file = write_temp(r#"[{"number": 1, "body": "Time: 3h"}, {"number": 2}]"#);

        let issues = read_issues(Some(file.path())).unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0]["number"], 1);
    }

    #[test]
    fn test_read_issues_rejects_non_array_input() {
        let file = write_temp(r#"{"number": 1}"#);

        assert!(read_issues(Some(file.path())).is_err());
    }

    #[test]
    fn test_run_extract_with_inline_text() {
        let config = write_temp("");
        let cli = Cli {
            config: Some(config.path().to_path_buf()),
            command: Command::Extract {
                text: Some("Time: 3h".to_string()),
            },
        };

        assert!(run(cli).is_ok());
    }

    #[test]
    fn test_run_batch_writes_output_file() {
        let config = write_temp("");
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("issues.json");
        let output = dir.path().join("enriched.json");
        std::fs::write(&input, r#"[{"number": 1, "body": "Time: 3h"}]"#).unwrap();

        let cli = Cli {
            config: Some(config.path().to_path_buf()),
            command: Command::Batch {
                input: Some(input),
                output: Some(output.clone()),
            },
        };
        run(cli).unwrap();

        let enriched: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(enriched[0]["estimated_hours"], 3);
        assert_eq!(enriched[0]["number"], 1);
    }

    #[test]
    fn test_run_summary_from_file() {
        let config = write_temp("");
        let input = write_temp(r#"[{"number": 1, "title": "Fix bug", "body": "[2h]"}]"#);

        let cli = Cli {
            config: Some(config.path().to_path_buf()),
            command: Command::Summary {
                input: Some(input.path().to_path_buf()),
            },
        };

        assert!(run(cli).is_ok());
    }

    #[test]
    fn test_run_rejects_inverted_bounds_in_config() {
        let config = write_temp(
            "weekly_planner:\n  default_estimate_hours: 9\n  max_estimate_hours: 8\n",
        );
        let cli = Cli {
            config: Some(config.path().to_path_buf()),
            command: Command::Patterns,
        };

        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }
}
