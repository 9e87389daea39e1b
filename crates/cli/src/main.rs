// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod replay;
mod script;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use room_booking_api::{BookingForm, FORM_TITLE, LoggingSink};
use room_booking_domain::RoomCatalog;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

use crate::replay::{ReplaySummary, replay};

/// Catalog used when `--catalog` is not given.
const BUNDLED_CATALOG: &str = include_str!("../data/rooms.json");

/// Room booking - replays form events against the meeting-room booking form
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON room catalog. If not provided, uses the bundled catalog.
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Path to the event script, one JSON event per line. Reads stdin if omitted.
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// IANA timezone the date picker works in
    #[arg(short, long, default_value = "UTC")]
    timezone: String,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .without_time()
        .init();

    match run(&args) {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let catalog: RoomCatalog = load_catalog(args.catalog.as_deref())?;
    info!(rooms = catalog.len(), "{FORM_TITLE}");

    let mut form: BookingForm<LoggingSink> =
        BookingForm::new(catalog, &args.timezone, LoggingSink::new())
            .wrap_err("Failed to mount the booking form")?;

    let script: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            let file: File = File::open(path)
                .wrap_err_with(|| format!("Failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut stdout: io::StdoutLock<'static> = io::stdout().lock();
    let summary: ReplaySummary =
        replay(&mut form, script, &mut stdout).wrap_err("Replay aborted")?;

    info!(
        applied = summary.applied,
        refused = summary.refused,
        submitted = summary.submitted,
        delivered = form.sink().delivered(),
        "Replay finished"
    );
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<RoomCatalog> {
    let Some(path) = path else {
        info!("Using bundled room catalog");
        return RoomCatalog::from_json(BUNDLED_CATALOG).wrap_err("Bundled catalog is invalid");
    };
    info!("Using room catalog at: {}", path.display());
    let json: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read catalog {}", path.display()))?;
    RoomCatalog::from_json(&json)
        .wrap_err_with(|| format!("Catalog {} is invalid", path.display()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog: RoomCatalog = load_catalog(None).unwrap();

        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let result: Result<RoomCatalog> =
            load_catalog(Some(Path::new("/nonexistent/rooms.json")));

        assert!(result.is_err());
    }

    #[test]
    fn test_args_default_to_utc() {
        let args: Args = Args::parse_from(["room-booking"]);

        assert_eq!(args.timezone, "UTC");
        assert!(args.catalog.is_none());
        assert!(args.script.is_none());
    }
}
