use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gradbin::{fetch_and_load, LoadError, Loaded, PayloadKind};
use gradbin_core::{config::Config, export};
use gradbin_feeds::{FileSource, HttpSource, RecordSource, Source, StdinSource};
use gradbin_tui::Session;

#[derive(Parser)]
#[command(
    name = "gradbin",
    about = "Fetch a gradient from a JSONBin bin, preview it and export it as JSON"
)]
struct Cli {
    /// Write debug logs to /tmp/gradbin-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Read configuration from PATH instead of ~/.config/gradbin/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Read the bin from a file instead of the API.
    #[arg(long, value_name = "PATH", conflicts_with = "stdin")]
    file: Option<PathBuf>,

    /// Read the bin from standard input instead of the API.
    #[arg(long)]
    stdin: bool,

    /// The input is the gradient payload itself, not a JSONBin response.
    #[arg(long)]
    raw: bool,

    /// Print the status messages and the gradient descriptor, then exit.
    #[arg(long)]
    print: bool,

    /// Export the document as JSON into DIR (default: the configured export
    /// directory), then exit.
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    export: Option<Option<PathBuf>>,

    /// JSONBin bin id.
    bin_id: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/gradbin-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("gradbin debug log started; tail -f /tmp/gradbin-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config unavailable, using defaults");
            Config::defaults()
        }),
    };

    let source = build_source(&cli, &config);
    let bin_id = cli.bin_id.clone().unwrap_or_default();
    let kind = if cli.raw {
        PayloadKind::Raw
    } else {
        PayloadKind::Envelope
    };

    // One fetch, then everything else is synchronous.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(fetch_and_load(&source, &bin_id, kind));
    drop(runtime);

    if !cli.print && cli.export.is_none() {
        let session = session_for(&source, &bin_id, outcome);
        return gradbin_tui::run(session, config);
    }

    match &outcome {
        Ok(loaded) if cli.print => {
            for line in loaded.messages() {
                println!("{line}");
            }
        }
        Ok(_) => {}
        Err(err) => {
            if let Some(format) = err.format() {
                eprintln!("{}", format.status_message());
            }
            eprintln!("{err}");
        }
    }

    if let Some(dir) = cli.export {
        let dir = dir.unwrap_or_else(|| config.export.directory.clone());
        let document = outcome.as_ref().ok().map(|loaded| &loaded.document);
        let path = export::export_latest(document, &dir)?;
        println!("Exported to {}", path.display());
    }

    outcome.map(|_| ()).map_err(Into::into)
}

fn build_source(cli: &Cli, config: &Config) -> Source {
    if let Some(path) = &cli.file {
        Source::File(FileSource::new(path.clone()))
    } else if cli.stdin {
        Source::Stdin(StdinSource)
    } else {
        Source::Http(
            HttpSource::new(config.source.base_url.clone())
                .with_access_key(config.source.access_key.clone())
                .with_timeout(config.source.timeout()),
        )
    }
}

fn session_for(source: &Source, bin_id: &str, outcome: Result<Loaded, LoadError>) -> Session {
    let mut session = Session::new(source.describe());
    if !bin_id.trim().is_empty() {
        session = session.with_bin_id(bin_id.trim());
    }
    match outcome {
        Ok(loaded) => session.with_document(loaded.format, loaded.document),
        Err(err) => {
            tracing::warn!(error = %err, "load failed");
            session.with_error(err.format(), err.to_string())
        }
    }
}
