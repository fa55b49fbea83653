// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagnostics setup. The TUI owns the terminal, so events go to a file or nowhere.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter directives.
pub const LOG_FILTER_ENV: &str = "GRAPHEDIT_LOG";

const DEFAULT_FILTER: &str = "info";

/// Filter from [`LOG_FILTER_ENV`], falling back to `info` when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Appends formatted events to `path`. Fails if the file cannot be opened or a global subscriber
/// is already installed.
pub fn init_file_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| err as Box<dyn std::error::Error>)?;
    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
