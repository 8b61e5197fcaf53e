// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::module_name_repetitions)]

use quizbank_syncing::{SyncConfig, SyncError, SyncRunner, SyncSummary, format_elapsed_time};

async fn run(config: &SyncConfig) -> Result<SyncSummary, SyncError> {
    config.check()?;
    log::info!("Start syncing");
    SyncRunner::run(config).await?.into_result()
}

/// Sends the log records to stdout as `[<time> <level>] <message>`.
fn setup_logger(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let now = humantime::format_rfc3339_seconds(std::time::SystemTime::now());
            out.finish(format_args!("[{now} {: <5}] {message}", record.level()));
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
}

#[tokio::main]
async fn main() {
    let config = SyncConfig::new_from_args();
    if let Err(err) = setup_logger(config.log_level()) {
        eprintln!("Failed to set up the logger: {err}");
        std::process::exit(1);
    }

    let start_time = std::time::Instant::now();
    match run(&config).await {
        Ok(_) => log::info!("Done in {}", format_elapsed_time(start_time.elapsed())),
        Err(err) => {
            log::error!("Sync failed after {}:\n{err}", format_elapsed_time(start_time.elapsed()));
            std::process::exit(1);
        }
    }
}
