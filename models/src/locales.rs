// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::CONTENT_FILE_EXTENSION;

pub const DEFAULT_SOURCE_LOCALE: &str = "en-US";
pub const DEFAULT_TARGET_LOCALES: &[&str] = &["zh-CN"];

/// Language and region tag, e.g. `en-US`.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(tag.to_string())
    }

    /// Name of the content file for this locale.
    #[must_use]
    pub fn content_file_name(&self) -> String {
        format!("{}.{CONTENT_FILE_EXTENSION}", self.0)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_LOCALE)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source locale the content is written in and the locales it gets translated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub source: Locale,
    pub targets: Vec<Locale>,
}

impl LocaleConfig {
    /// Returns the source locale followed by the target locales, without repetitions.
    #[must_use]
    pub fn all(&self) -> Vec<Locale> {
        let mut result = vec![self.source.clone()];
        for target in &self.targets {
            if !result.contains(target) {
                result.push(target.clone());
            }
        }
        result
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            source: Locale::default(),
            targets: DEFAULT_TARGET_LOCALES.iter().map(|tag| Locale::new(tag)).collect(),
        }
    }
}
