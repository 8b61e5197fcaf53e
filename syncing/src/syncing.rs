// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Propagating the questions sheet into the question directories.

use std::{path::Path, sync::Arc};

use quizbank_models::{
    content,
    errors::{IoOrSerdeError, MapIo},
    locales::Locale,
    metadata::QuestionMetadata,
    questions::{QuestionRaw, QuestionSheet},
};

use crate::{
    config::{QuestionsLayout, SyncConfig},
    errors::{QuestionError, SyncError},
    scaffold::{self, Scaffolded},
    worker_pool::WorkerPool,
};

/// Maximal number of questions waiting for a free worker.
const CHANNEL_QUEUE_BOUND: usize = 64;

/// What happened to a single question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionOutcome {
    /// The question directory was created from the template.
    pub created: bool,

    /// `metadata.json` was rewritten.
    pub metadata_updated: bool,

    /// Number of content files that were rewritten.
    pub contents_patched: usize,
}

impl QuestionOutcome {
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        !self.created && !self.metadata_updated && self.contents_patched == 0
    }
}

/// Aggregated result of a sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Number of questions handled successfully.
    pub synced: usize,

    /// Number of question directories created from the template.
    pub created: usize,

    /// Number of rewritten metadata files.
    pub metadata_updated: usize,

    /// Number of rewritten content files.
    pub contents_patched: usize,

    /// Number of questions which needed no changes.
    pub unchanged: usize,

    /// Slugs of questions which failed to sync.
    pub failed: Vec<String>,
}

impl SyncSummary {
    pub fn add(&mut self, outcome: &QuestionOutcome) {
        self.synced += 1;
        self.created += usize::from(outcome.created);
        self.metadata_updated += usize::from(outcome.metadata_updated);
        self.contents_patched += outcome.contents_patched;
        self.unchanged += usize::from(outcome.is_unchanged());
    }

    pub fn fail(&mut self, slug: &str) {
        self.failed.push(slug.to_string());
    }

    /// Turns a summary with failures into an error.
    ///
    /// # Errors
    ///
    /// Returns `Err` if at least one question failed to sync.
    pub fn into_result(mut self) -> Result<Self, SyncError> {
        if self.failed.is_empty() {
            Ok(self)
        } else {
            self.failed.sort();
            Err(SyncError::FailedQuestions(self.failed))
        }
    }

    pub fn log(&self) {
        log::info!(
            "Synced {} questions: {} created, {} metadata files updated, \
             {} content files patched, {} unchanged",
            self.synced,
            self.created,
            self.metadata_updated,
            self.contents_patched,
            self.unchanged,
        );
        if !self.failed.is_empty() {
            log::error!("Failed to sync {} questions", self.failed.len());
        }
    }
}

impl merge::Merge for SyncSummary {
    fn merge(&mut self, other: Self) {
        self.synced += other.synced;
        self.created += other.created;
        self.metadata_updated += other.metadata_updated;
        self.contents_patched += other.contents_patched;
        self.unchanged += other.unchanged;
        self.failed.extend(other.failed);
    }
}

async fn read_text(path: &Path) -> Result<String, IoOrSerdeError> {
    tokio::fs::read_to_string(path).await.map_with_path(path)
}

async fn write_if_changed(path: &Path, old: &str, new: &str) -> Result<bool, IoOrSerdeError> {
    if old == new {
        return Ok(false);
    }
    tokio::fs::write(path, new).await.map_with_path(path)?;
    Ok(true)
}

/// Syncs one question: scaffolds its directory, overlays the sheet fields onto its metadata and
/// fills the title placeholder in the content files of the given locales.
///
/// Nothing is written if the metadata can not be read, parsed or merged.
///
/// # Errors
///
/// Returns `Err` if any of the files can not be read, parsed or written.
pub async fn sync_question(
    question: &QuestionRaw,
    layout: &QuestionsLayout,
    locales: &[Locale],
) -> Result<QuestionOutcome, QuestionError> {
    let slug = question.slug.as_str();
    let scaffolded = scaffold::ensure_question_dir(layout, slug).await?;

    let metadata_path = layout.metadata_path(slug);
    let content_paths: Vec<_> =
        locales.iter().map(|locale| layout.content_path(slug, locale)).collect();

    let (metadata_text, content_texts) = tokio::try_join!(
        read_text(&metadata_path),
        futures::future::try_join_all(content_paths.iter().map(|path| read_text(path))),
    )?;

    let metadata = QuestionMetadata::parse(&metadata_text, &metadata_path)?.overlay(question)?;
    let metadata_updated =
        write_if_changed(&metadata_path, &metadata_text, &metadata.to_pretty_string()?).await?;

    let mut contents_patched = 0;
    for (path, text) in content_paths.iter().zip(content_texts) {
        if !content::contains_placeholder(&text) {
            log::debug!("No title placeholder in `{}`", path.display());
        }
        let patched = content::patch(&text, &question.title);
        if write_if_changed(path, &text, &patched).await? {
            contents_patched += 1;
        }
    }

    Ok(QuestionOutcome {
        created: scaffolded == Scaffolded::Created,
        metadata_updated,
        contents_patched,
    })
}

/// Pulls questions from the channel until it gets closed and syncs them one by one.
///
/// A failing question is logged and recorded in the summary; the worker carries on.
async fn work(
    rx: async_channel::Receiver<QuestionRaw>,
    layout: Arc<QuestionsLayout>,
    locales: Arc<[Locale]>,
) -> SyncSummary {
    let mut summary = SyncSummary::default();
    while let Ok(question) = rx.recv().await {
        match sync_question(&question, &layout, &locales).await {
            Ok(outcome) => {
                log::debug!("Synced `{}`: {outcome:?}", question.slug);
                summary.add(&outcome);
            }
            Err(err) => {
                log::error!("Question `{}`: {err}", question.slug);
                summary.fail(&question.slug);
            }
        }
    }
    summary
}

/// Runs the sync over all questions from the sheet.
pub struct SyncRunner;

impl SyncRunner {
    /// Loads the questions sheet and syncs every question in it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the sheet could not be loaded or a worker could not be joined.
    /// Failures of single questions are reported in the returned summary.
    pub async fn run(config: &SyncConfig) -> Result<SyncSummary, SyncError> {
        let sheet = QuestionSheet::read(&config.sheet_path)?;
        log::info!("Loaded {} questions from `{}`", sheet.len(), config.sheet_path.display());
        Self::sync(sheet, config).await
    }

    /// Syncs every question from the given sheet using `config.jobs` workers.
    ///
    /// Questions are handled in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if all the workers stopped before receiving all questions or a worker could
    /// not be joined.
    pub async fn sync(sheet: QuestionSheet, config: &SyncConfig) -> Result<SyncSummary, SyncError> {
        let layout = Arc::new(config.layout.clone());
        let locales: Arc<[Locale]> = config.locales.clone().into();
        let jobs = config.jobs.clamp(1, sheet.len().max(1));

        let (tx, rx) = async_channel::bounded(CHANNEL_QUEUE_BOUND);
        let pool = WorkerPool::start(jobs, || work(rx.clone(), layout.clone(), locales.clone()));
        drop(rx);
        log::info!("Using {} workers", pool.size());

        for question in sheet {
            tx.send(question).await?;
        }
        drop(tx);

        let summary = pool.finish().await?;
        summary.log();
        Ok(summary)
    }
}
