// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use crate::errors::ConfigCheckError;

/// Kind of filesystem entry a configured path has to point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// Verifies that `path` exists and points to an entry of the given kind.
///
/// # Errors
///
/// Returns an error if the path does not exist or is of the other kind.
pub fn expect_entry(path: &Path, kind: EntryKind) -> Result<(), ConfigCheckError> {
    if !path.exists() {
        return Err(ConfigCheckError::DoesNotExist(path.to_owned()));
    }
    match kind {
        EntryKind::File if !path.is_file() => Err(ConfigCheckError::NotAFile(path.to_owned())),
        EntryKind::Dir if !path.is_dir() => Err(ConfigCheckError::NotADir(path.to_owned())),
        _ => Ok(()),
    }
}

/// Formats the run time rounded down to whole seconds, e.g. `1h 2m 4s`.
#[must_use]
pub fn format_elapsed_time(elapsed: std::time::Duration) -> String {
    let whole_seconds = std::time::Duration::from_secs(elapsed.as_secs());
    humantime::format_duration(whole_seconds).to_string()
}
