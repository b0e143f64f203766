//! AeroDesk console binary.
//!
//! Loads configuration, initialises structured logging, and then either runs
//! the command given on the command line or reads commands from stdin until
//! `quit` or end of input.

use std::process::ExitCode;

use aerodesk_client::BackendClient;
use aerodesk_console::{load_config, Command, Console};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Splits the config path off the arguments.
///
/// The first argument is the config path when it names a `.toml` file;
/// otherwise `AERODESK_CONFIG_PATH` is consulted. Remaining arguments form a
/// one-shot command.
fn resolve_config_path(mut args: Vec<String>) -> (Option<String>, &'static str, Vec<String>) {
    if args
        .first()
        .is_some_and(|first| first.trim().ends_with(".toml"))
    {
        let path = args.remove(0);
        return (Some(path), "cli-arg", args);
    }

    if let Ok(path) = std::env::var("AERODESK_CONFIG_PATH") {
        if !path.trim().is_empty() {
            return (Some(path), "env-var", args);
        }
    }

    (None, "default", args)
}

#[tokio::main]
async fn main() -> ExitCode {
    let (resolved_config_path, config_source, rest) =
        resolve_config_path(std::env::args().skip(1).collect());
    let selected_config_path = resolved_config_path.as_deref().or(Some("config.toml"));

    let config = match load_config(selected_config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("aerodesk: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr so command output stays clean on stdout.
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::info!(
        source = config_source,
        path = selected_config_path.unwrap_or("<none>"),
        backend = %config.backend.base_url,
        "resolved startup configuration"
    );

    let client = match BackendClient::new(&config.backend) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("aerodesk: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut console = Console::new(client);

    if !rest.is_empty() {
        return run_line(&mut console, &rest.join(" ")).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "failed to read stdin");
                return ExitCode::FAILURE;
            }
        };
        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => match console.execute(command).await {
                Some(output) => println!("{output}"),
                None => break,
            },
            Err(e) => println!("{e}"),
        }
    }

    tracing::info!(turns = console.session().transcript().len(), "console closed");
    ExitCode::SUCCESS
}

async fn run_line(console: &mut Console, line: &str) -> ExitCode {
    match Command::parse(line) {
        Ok(Some(command)) => {
            if let Some(output) = console.execute(command).await {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("aerodesk: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn toml_first_argument_is_config_path() {
        let (path, source, rest) = resolve_config_path(args(&["ops.toml", "cargo", "dangerous"]));
        assert_eq!(path.as_deref(), Some("ops.toml"));
        assert_eq!(source, "cli-arg");
        assert_eq!(rest, args(&["cargo", "dangerous"]));
    }

    #[test]
    fn command_arguments_are_left_alone() {
        let (_, source, rest) = resolve_config_path(args(&["flights", "in_flight"]));
        assert_ne!(source, "cli-arg");
        assert_eq!(rest, args(&["flights", "in_flight"]));
    }
}
