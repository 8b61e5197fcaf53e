// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Creating question directories from the template.

use std::path::Path;

use async_walkdir::WalkDir;
use futures::StreamExt;

use quizbank_models::errors::{IoOrSerdeError, MapIo};

use crate::config::QuestionsLayout;

/// State of a question directory after `ensure_question_dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaffolded {
    /// The directory was already there and was left untouched.
    Existing,

    /// The directory was created and filled from the template.
    Created,
}

/// Makes sure the directory of the question exists, copying the template into it if it did not.
///
/// Only the existence of the directory is checked, not its contents.
///
/// # Errors
///
/// Returns `Err` if the directory could not be created or the template could not be copied.
pub async fn ensure_question_dir(
    layout: &QuestionsLayout,
    slug: &str,
) -> Result<Scaffolded, IoOrSerdeError> {
    let dir = layout.question_dir(slug);
    if tokio::fs::try_exists(&dir).await.map_with_path(&dir)? {
        return Ok(Scaffolded::Existing);
    }

    tokio::fs::create_dir(&dir).await.map_with_path(&dir)?;
    copy_dir_contents(&layout.template_dir, &dir).await?;
    log::debug!("Created `{}` from the template", dir.display());
    Ok(Scaffolded::Created)
}

/// Recursively copies the contents of `from` into the existing directory `to`.
///
/// # Errors
///
/// Returns `Err` if reading the source or writing the destination fails.
pub async fn copy_dir_contents(from: &Path, to: &Path) -> Result<(), IoOrSerdeError> {
    tokio::fs::metadata(from).await.map_with_path(from)?;

    let mut walker = WalkDir::new(from);
    while let Some(entry) = walker.next().await {
        let entry = entry.map_err(std::io::Error::other).map_with_path(from)?;
        let source = entry.path();
        let Ok(relative) = source.strip_prefix(from) else {
            continue;
        };
        let target = to.join(relative);

        if entry.file_type().await.map_with_path(&source)?.is_dir() {
            tokio::fs::create_dir_all(&target).await.map_with_path(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent).await.map_with_path(parent)?;
            }
            tokio::fs::copy(&source, &target).await.map_with_path(&target)?;
        }
    }
    Ok(())
}
