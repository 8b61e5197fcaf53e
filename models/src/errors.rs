// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Error returned when a problem with IO or (de)serialization occured.
#[derive(Error, Debug)]
pub enum IoOrSerdeError {
    #[error("IO error: {0} ({1:?})")]
    Io(std::io::Error, std::path::PathBuf),

    #[error("In file `{1}`.\nCSV parsing error: {0}")]
    ReadCsv(csv::Error, std::path::PathBuf),

    #[error("In file `{1}`.\nJSON parsing error: {0}")]
    ReadJson(serde_json::Error, std::path::PathBuf),

    #[error("JSON serialization error: {0}")]
    WriteJson(serde_json::Error),

    #[error("In file `{0}`.\nExpected a JSON object at the top level")]
    NotAnObject(std::path::PathBuf),
}

/// Error returned when the ranking column could not be coerced to a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Ranking `{value}` of question `{slug}` is not a number")]
pub struct ParseRankingError {
    pub slug: String,
    pub value: String,
}

impl ParseRankingError {
    #[must_use]
    pub fn new(slug: &str, value: &str) -> Self {
        Self { slug: slug.to_string(), value: value.to_string() }
    }
}

/// Errors related to reading, merging and writing question metadata.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("{0}")]
    IoOrSerde(#[from] IoOrSerdeError),

    #[error("{0}")]
    Ranking(#[from] ParseRankingError),
}

/// Attaches the path of the file being handled to IO errors.
pub trait MapIo<T> {
    /// Maps the error to `IoOrSerdeError::Io`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `self` holds an error.
    fn map_with_path(self, path: &std::path::Path) -> Result<T, IoOrSerdeError>;
}

impl<T> MapIo<T> for Result<T, std::io::Error> {
    fn map_with_path(self, path: &std::path::Path) -> Result<T, IoOrSerdeError> {
        self.map_err(|e| IoOrSerdeError::Io(e, path.to_owned()))
    }
}

/// Attaches the path of the file being handled to (de)serialization errors.
pub trait MapSerde<T> {
    /// Maps a deserialization error to the matching `IoOrSerdeError` variant.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `self` holds an error.
    fn map_with_path(self, path: &std::path::Path) -> Result<T, IoOrSerdeError>;
}

impl<T> MapSerde<T> for Result<T, csv::Error> {
    fn map_with_path(self, path: &std::path::Path) -> Result<T, IoOrSerdeError> {
        self.map_err(|e| IoOrSerdeError::ReadCsv(e, path.to_owned()))
    }
}

impl<T> MapSerde<T> for Result<T, serde_json::Error> {
    fn map_with_path(self, path: &std::path::Path) -> Result<T, IoOrSerdeError> {
        self.map_err(|e| IoOrSerdeError::ReadJson(e, path.to_owned()))
    }
}
