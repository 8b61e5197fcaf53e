// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

pub use quizbank_models::errors::{IoOrSerdeError, MetadataError, ParseRankingError};
use quizbank_models::questions::QuestionRaw;

/// Error returned if config checking failed.
#[derive(Error, Debug)]
pub enum ConfigCheckError {
    #[error("Path '{0}' does not exist")]
    DoesNotExist(std::path::PathBuf),

    #[error("Path '{0}' is not a file")]
    NotAFile(std::path::PathBuf),

    #[error("Path '{0}' is not a directory")]
    NotADir(std::path::PathBuf),
}

/// Error while syncing a single question.
#[derive(Error, Debug)]
pub enum QuestionError {
    #[error("{0}")]
    IoOrSerde(#[from] IoOrSerdeError),

    #[error("{0}")]
    Ranking(#[from] ParseRankingError),
}

impl From<MetadataError> for QuestionError {
    fn from(error: MetadataError) -> Self {
        match error {
            MetadataError::IoOrSerde(error) => Self::IoOrSerde(error),
            MetadataError::Ranking(error) => Self::Ranking(error),
        }
    }
}

/// Error returned when a sync run fails.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Reading the questions sheet: {0}")]
    Sheet(#[from] IoOrSerdeError),

    #[error("Config check: {0}")]
    ConfigCheck(#[from] ConfigCheckError),

    #[error("Channel sending error: {0}")]
    Channel(#[from] async_channel::SendError<QuestionRaw>),

    #[error("Joining a worker: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Failed to sync {} question(s): {}", .0.len(), .0.join(", "))]
    FailedQuestions(Vec<String>),
}
