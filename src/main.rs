use clap::Parser;
use empman::cli::commands::execute_command;
use empman::cli::output;
use empman::cli::Cli;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Formatted output directed to stderr, stdout is reserved for records
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn given_raw_tokens_when_parsing_cli_then_collects_them_verbatim() {
        let cli = Cli::try_parse_from([
            "empman",
            "-dd",
            "--file",
            "/tmp/e.json",
            "update",
            "Id:1",
            "FirstName:Jane",
        ])
        .unwrap();

        assert_eq!(cli.debug, 2);
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("/tmp/e.json")));
        assert_eq!(cli.args, vec!["update", "Id:1", "FirstName:Jane"]);
    }

    #[test]
    fn given_dash_alias_after_separator_when_parsing_cli_then_kept_as_token() {
        let cli = Cli::try_parse_from(["empman", "--", "-getall"]).unwrap();

        assert_eq!(cli.args, vec!["-getall"]);
    }
}
