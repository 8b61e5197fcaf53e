// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use clap::Parser;

use quizbank_models::{
    locales::{Locale, LocaleConfig},
    metadata::METADATA_FILE_NAME,
};

use crate::{
    commands::Args,
    errors::ConfigCheckError,
    utils::{self, EntryKind},
};

/// Where the question directories and the template live.
#[must_use]
#[derive(Debug, Clone)]
pub struct QuestionsLayout {
    /// Directory containing one directory per question.
    pub questions_dir: PathBuf,

    /// Directory copied into new question directories.
    pub template_dir: PathBuf,
}

impl QuestionsLayout {
    pub fn new(questions_dir: &Path, template_dir: &Path) -> Self {
        Self { questions_dir: questions_dir.to_owned(), template_dir: template_dir.to_owned() }
    }

    #[must_use]
    pub fn question_dir(&self, slug: &str) -> PathBuf {
        self.questions_dir.join(slug)
    }

    #[must_use]
    pub fn metadata_path(&self, slug: &str) -> PathBuf {
        self.question_dir(slug).join(METADATA_FILE_NAME)
    }

    #[must_use]
    pub fn content_path(&self, slug: &str, locale: &Locale) -> PathBuf {
        self.question_dir(slug).join(locale.content_file_name())
    }

    /// Checks validity of the layout.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the directories, the template metadata or the template content of the
    /// source locale do not exist.
    pub fn check(&self) -> Result<(), ConfigCheckError> {
        utils::expect_entry(&self.questions_dir, EntryKind::Dir)?;
        utils::expect_entry(&self.template_dir, EntryKind::Dir)?;
        utils::expect_entry(&self.template_dir.join(METADATA_FILE_NAME), EntryKind::File)?;
        let content_file = self.template_dir.join(Locale::default().content_file_name());
        utils::expect_entry(&content_file, EntryKind::File)?;
        Ok(())
    }
}

/// Configuration for `SyncRunner`.
#[must_use]
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Path to the questions sheet.
    pub sheet_path: PathBuf,

    /// Question directories.
    pub layout: QuestionsLayout,

    /// Locales whose content files get patched.
    pub locales: Vec<Locale>,

    /// Number of workers.
    pub jobs: usize,

    /// Whether to log on the debug level.
    pub verbose: bool,
}

impl SyncConfig {
    pub fn new(args: &Args) -> Self {
        let locales = if args.all_locales {
            LocaleConfig::default().all()
        } else if args.locales.is_empty() {
            vec![Locale::default()]
        } else {
            let mut locales = Vec::with_capacity(args.locales.len());
            for tag in &args.locales {
                let locale = Locale::new(tag);
                if !locales.contains(&locale) {
                    locales.push(locale);
                }
            }
            locales
        };

        Self {
            sheet_path: PathBuf::from(&args.sheet),
            layout: QuestionsLayout::new(Path::new(&args.questions), Path::new(&args.template)),
            locales,
            jobs: args.jobs.unwrap_or_else(num_cpus::get).max(1),
            verbose: args.verbose,
        }
    }

    /// Constructs a new `SyncConfig` from the command line arguments.
    pub fn new_from_args() -> Self {
        Self::new(&Args::parse())
    }

    /// Checks validity of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if paths expected to exist do not exist.
    pub fn check(&self) -> Result<(), ConfigCheckError> {
        utils::expect_entry(&self.sheet_path, EntryKind::File)?;
        self.layout.check()?;
        Ok(())
    }

    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info }
    }
}
