#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use anyhow::Context as _;
use clap::Parser as _;
use std::io::IsTerminal as _;

#[derive(clap::Parser)]
#[clap(about = "Prompt for lines of input with history")]
struct Opt {
    /// Text shown in front of the input
    #[clap(short, long, default_value = ">")]
    message: String,

    /// Initial value of every prompt
    #[clap(short, long, default_value = "")]
    default: String,

    /// Use plain line based prompts even on a terminal
    #[clap(long)]
    dialog: bool,

    #[clap(long)]
    config: Option<std::path::PathBuf>,

    /// Write logs here (filtered by PROMPTLINE_LOG)
    #[clap(long)]
    log_file: Option<std::path::PathBuf>,
}

fn init_logging(
    log_file: Option<&std::path::Path>,
    interactive: bool,
) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("PROMPTLINE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("couldn't open {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    // otherwise the terminal belongs to the prompt, so logs are dropped
    Ok(())
}

#[tokio::main]
async fn async_main(opt: Opt, offset: time::UtcOffset) -> anyhow::Result<i32> {
    let interactive = !opt.dialog && std::io::stdin().is_terminal();
    init_logging(opt.log_file.as_deref(), interactive)?;

    let config = promptline::Config::load(opt.config.as_deref())?;
    tracing::debug!(?config, interactive, "starting");

    if interactive {
        promptline::app::interactive(config, &opt.message, &opt.default, offset)
            .await
    } else {
        promptline::app::dialog(&config, &opt.message, &opt.default).await
    }
}

fn main() {
    // this has to happen before any other threads exist
    let offset = time::UtcOffset::current_local_offset()
        .unwrap_or(time::UtcOffset::UTC);
    match async_main(Opt::parse(), offset) {
        Ok(code) => {
            std::process::exit(code);
        }
        Err(e) => {
            eprintln!("promptline: {:#}", e);
            std::process::exit(1);
        }
    };
}
