// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Question rows read from the questions sheet.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::errors::{IoOrSerdeError, MapIo, MapSerde, ParseRankingError};

/// 2^63, the first whole float that does not fit into `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// 2^64, the first whole float that does not fit into `u64`.
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// One row of the questions sheet.
///
/// Columns other than the ones listed here are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRaw {
    /// Unique identifier of the question. Also the name of its directory.
    pub slug: String,

    /// Title injected into the content file in place of the placeholder.
    pub title: String,

    /// Ranking as written in the sheet. See `QuestionRaw::ranking`.
    pub ranking: String,

    /// Section the question belongs to.
    pub section: String,
}

impl QuestionRaw {
    /// Coerces the raw ranking to a JSON number.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the ranking is not a finite number.
    pub fn ranking(&self) -> Result<serde_json::Number, ParseRankingError> {
        coerce_ranking(&self.slug, &self.ranking)
    }
}

/// Coerces a ranking value to a number.
///
/// Blank values become `0`. Whole numbers are kept as integers so that `3` and `3.0` are written
/// the same way. Whole numbers of 2^64 and more do not fit an integer and stay floats, which
/// serialize in exponent notation.
///
/// # Errors
///
/// Returns `Err` if the value is not a finite number.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
pub fn coerce_ranking(slug: &str, value: &str) -> Result<serde_json::Number, ParseRankingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(serde_json::Number::from(0));
    }

    let number: f64 = trimmed.parse().map_err(|_| ParseRankingError::new(slug, value))?;
    if !number.is_finite() {
        return Err(ParseRankingError::new(slug, value));
    }

    if number.fract() == 0.0 {
        if number.abs() < I64_BOUND {
            return Ok(serde_json::Number::from(number as i64));
        }
        if number > 0.0 && number < U64_BOUND {
            return Ok(serde_json::Number::from(number as u64));
        }
    }

    serde_json::Number::from_f64(number).ok_or_else(|| ParseRankingError::new(slug, value))
}

/// All questions from the sheet keyed by their slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSheet {
    questions: BTreeMap<String, QuestionRaw>,
}

impl QuestionSheet {
    /// Loads the sheet from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `Err` if fails to read from `path` or parse the contents.
    pub fn read(path: &std::path::Path) -> Result<Self, IoOrSerdeError> {
        let file = std::fs::File::open(path).map_with_path(path)?;
        Self::from_reader(file, path)
    }

    /// Loads the sheet from any reader.
    ///
    /// `origin` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns `Err` if fails to parse the contents.
    pub fn from_reader<R: std::io::Read>(
        reader: R,
        origin: &std::path::Path,
    ) -> Result<Self, IoOrSerdeError> {
        let mut sheet = Self::default();
        let mut reader = csv::Reader::from_reader(reader);
        for result in reader.deserialize() {
            let question: QuestionRaw = result.map_with_path(origin)?;
            sheet.insert(question);
        }
        Ok(sheet)
    }

    /// Inserts a question. A question with the same slug gets replaced.
    pub fn insert(&mut self, question: QuestionRaw) {
        if let Some(previous) = self.questions.insert(question.slug.clone(), question) {
            log::warn!("Question `{}` repeated in the sheet, using the later row", previous.slug);
        }
    }

    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&QuestionRaw> {
        self.questions.get(slug)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl FromIterator<QuestionRaw> for QuestionSheet {
    fn from_iter<I: IntoIterator<Item = QuestionRaw>>(iter: I) -> Self {
        let mut sheet = Self::default();
        for question in iter {
            sheet.insert(question);
        }
        sheet
    }
}

impl IntoIterator for QuestionSheet {
    type Item = QuestionRaw;
    type IntoIter = std::collections::btree_map::IntoValues<String, QuestionRaw>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.into_values()
    }
}
