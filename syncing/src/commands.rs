// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::Parser;

pub const DEFAULT_SHEET_PATH: &str = "data/react-questions.csv";
pub const DEFAULT_QUESTIONS_PATH: &str = "questions";
pub const DEFAULT_TEMPLATE_PATH: &str = "__template__/todo-change-me";

/// Arguments of the sync command.
///
/// All paths are relative to the current working directory.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Sync question metadata and titles from the questions sheet",
    long_about = "The questions sheet is the source of truth for the slug, ranking, section and \
                  title of every question. This command scaffolds missing question directories \
                  from the template, overlays the sheet fields onto each `metadata.json` and \
                  fills the title placeholder in the localized content files."
)]
pub struct Args {
    /// CSV file with the questions.
    #[arg(long, default_value = DEFAULT_SHEET_PATH)]
    pub sheet: String,

    /// Directory containing one directory per question.
    #[arg(long, default_value = DEFAULT_QUESTIONS_PATH)]
    pub questions: String,

    /// Directory copied into every newly created question directory.
    #[arg(long, default_value = DEFAULT_TEMPLATE_PATH)]
    pub template: String,

    /// Locale of the content files to patch. Can be repeated.
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Patch the content files of the source locale and all the target locales.
    #[arg(long, conflicts_with = "locales")]
    pub all_locales: bool,

    /// Number of questions synced at the same time. Defaults to the number of CPUs.
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Log every handled question.
    #[arg(short, long)]
    pub verbose: bool,
}
