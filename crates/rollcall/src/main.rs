mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let result = match cli.cmd.take() {
        Some(command) => command.run(cli).await,
        None => cli.run_default().await,
    };
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

fn setup_logger(cli: &Cli) {
    let (log_level, invalid_env_value) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(value) => match parse_log_level(&value) {
                    Some(level) => (level, None),
                    None => (DEFAULT_LOG_LEVEL, Some(value)),
                },
                Err(_) => (DEFAULT_LOG_LEVEL, None),
            }
        };

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(value) = invalid_env_value {
        log::warn!(
            "Ignoring invalid `LOG_LEVEL` value `{value}`; expected one of \
            `trace`, `debug`, `verbose` or `info`."
        );
    }
}

fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        _ => None,
    }
}
