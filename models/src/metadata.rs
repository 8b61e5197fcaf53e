// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Metadata file stored next to the content of every question.

use serde_json::{Map, Value};

use crate::{
    errors::{IoOrSerdeError, MapSerde, MetadataError},
    questions::QuestionRaw,
};

pub const METADATA_FILE_NAME: &str = "metadata.json";

pub const SLUG: &str = "slug";
pub const RANKING: &str = "ranking";
pub const SECTION: &str = "section";
pub const PUBLISHED: &str = "published";
pub const IMPORTANCE: &str = "importance";
pub const FEATURED: &str = "featured";

/// Contents of a `metadata.json` file.
///
/// The object is kept as-is (including fields unknown to this crate and their order) so that
/// overlaying the fields from the sheet leaves everything else untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionMetadata {
    fields: Map<String, Value>,
}

impl QuestionMetadata {
    /// Parses the metadata. `path` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the text is not valid JSON or its top-level value is not an object.
    pub fn parse(text: &str, path: &std::path::Path) -> Result<Self, IoOrSerdeError> {
        let value: Value = serde_json::from_str(text).map_with_path(path)?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(IoOrSerdeError::NotAnObject(path.to_owned())),
        }
    }

    /// Returns a copy of the metadata with `slug`, `ranking` and `section` taken from the
    /// question. The rest of the fields are copied over unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the question's ranking can not be coerced to a number.
    pub fn overlay(&self, question: &QuestionRaw) -> Result<Self, MetadataError> {
        let ranking = question.ranking()?;
        let mut fields = self.fields.clone();
        fields.insert(SLUG.to_string(), Value::String(question.slug.clone()));
        fields.insert(RANKING.to_string(), Value::Number(ranking));
        fields.insert(SECTION.to_string(), Value::String(question.section.clone()));
        Ok(Self { fields })
    }

    /// Serializes the metadata with two-space indentation and a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the serialization fails.
    pub fn to_pretty_string(&self) -> Result<String, IoOrSerdeError> {
        let mut text =
            serde_json::to_string_pretty(&self.fields).map_err(IoOrSerdeError::WriteJson)?;
        text.push('\n');
        Ok(text)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.fields.get(SLUG).and_then(Value::as_str)
    }

    #[must_use]
    pub fn ranking(&self) -> Option<&serde_json::Number> {
        match self.fields.get(RANKING) {
            Some(Value::Number(number)) => Some(number),
            _ => None,
        }
    }

    #[must_use]
    pub fn section(&self) -> Option<&str> {
        self.fields.get(SECTION).and_then(Value::as_str)
    }

    #[must_use]
    pub fn published(&self) -> Option<bool> {
        self.fields.get(PUBLISHED).and_then(Value::as_bool)
    }

    #[must_use]
    pub fn importance(&self) -> Option<&str> {
        self.fields.get(IMPORTANCE).and_then(Value::as_str)
    }

    #[must_use]
    pub fn featured(&self) -> Option<bool> {
        self.fields.get(FEATURED).and_then(Value::as_bool)
    }

    /// Iterates over the field names in their stored order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
