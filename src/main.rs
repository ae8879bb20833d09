use std::ffi::{OsStr, OsString};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use walcolors::models::AppConfig;
use walcolors::services::{format_palette, Dispatcher, Registry};

#[derive(Parser)]
#[command(name = "walcolors", version)]
#[command(about = "Generate a 16-color terminal palette from an image")]
struct Cli {
    /// Backend: colorthief, colorz, haishoku, schemer2 or wal
    #[arg(allow_hyphen_values = true)]
    backend: Option<OsString>,

    /// Image to extract colors from
    #[arg(allow_hyphen_values = true)]
    image: Option<OsString>,

    /// "1" for a light palette; anything else gives a dark one
    #[arg(allow_hyphen_values = true)]
    light: Option<OsString>,

    /// Ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    extra: Vec<OsString>,
}

impl Cli {
    /// Positional arguments in order, stopping at the first missing one
    fn positionals(&self) -> Vec<&OsStr> {
        [&self.backend, &self.image, &self.light]
            .into_iter()
            .map_while(|arg| arg.as_deref())
            .collect()
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries only the palette
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "walcolors=warn,wal_palette=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if !cli.extra.is_empty() {
        tracing::debug!(extra = ?cli.extra, "Ignoring extra arguments");
    }

    let config = AppConfig::load();
    let dispatcher = Dispatcher::new(Registry::builtin(&config));

    if let Some(palette) = dispatcher.run(&cli.positionals())? {
        println!("{}", format_palette(&palette)?);
    }

    Ok(())
}
