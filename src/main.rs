// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use the_workpool::config::{load_config, load_task_file, RuntimeBuilder};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: the-workpool <config.yaml|config.toml> <tasks.json> [--progress]";

struct CliArgs {
    config_file: String,
    task_file: String,
    progress: bool,
}

fn parse_args(args: &[String]) -> Option<CliArgs> {
    let progress = args.iter().any(|arg| arg == "--progress");
    let positional: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    match positional.as_slice() {
        [config_file, task_file] => Some(CliArgs {
            config_file: config_file.to_string(),
            task_file: task_file.to_string(),
            progress,
        }),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Some(cli) => cli,
        None => {
            eprintln!("{}", USAGE);
            eprintln!("Example: the-workpool configs/multiply.yaml configs/tasks.json --progress");
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: CliArgs) -> Result<()> {
    let config = load_config(&cli.config_file)
        .with_context(|| format!("loading configuration {}", cli.config_file))?;
    let tasks = load_task_file(&cli.task_file)
        .with_context(|| format!("loading tasks {}", cli.task_file))?;
    let (runner, processor) = RuntimeBuilder::from_config(&config)?;

    eprintln!("📋 Configuration: {}", cli.config_file);
    eprintln!("🔧 Processor: {}", config.processor.processor);
    eprintln!("🧮 Strategy: {}", runner.strategy());

    let report = if cli.progress {
        runner.run_with_progress(tasks, processor).await?
    } else {
        runner.run(tasks, processor, None).await?
    };

    for result in &report.results {
        println!("{}", serde_json::to_string(result)?);
    }

    for message in &report.error_messages {
        tracing::warn!("{}", message);
    }
    if report.dropped_error_messages > 0 {
        tracing::warn!(
            dropped = report.dropped_error_messages,
            "Older error messages were dropped from the log"
        );
    }

    eprintln!();
    eprintln!("📊 Summary ({} strategy, {} workers)", report.strategy, report.worker_count);
    eprintln!("   ✅ Succeeded: {}", report.success_count);
    eprintln!("   ❌ Failed:    {}", report.error_count);
    if report.skipped > 0 {
        eprintln!("   ⏭️  Skipped:   {}", report.skipped);
    }
    eprintln!("   ⏱️  Elapsed:   {:.3}s", report.elapsed_secs());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_positional_and_progress_flag() {
        let cli = parse_args(&args(&["cfg.yaml", "--progress", "tasks.json"])).unwrap();
        assert_eq!(cli.config_file, "cfg.yaml");
        assert_eq!(cli.task_file, "tasks.json");
        assert!(cli.progress);
    }

    #[test]
    fn requires_exactly_two_files() {
        assert!(parse_args(&args(&["cfg.yaml"])).is_none());
        assert!(parse_args(&args(&["a", "b", "c"])).is_none());
    }
}
