// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod utils;
mod worker_pool;

pub mod config;
pub mod errors;
pub mod scaffold;
pub mod syncing;

pub use crate::{
    commands::Args,
    config::{QuestionsLayout, SyncConfig},
    errors::SyncError,
    syncing::{SyncRunner, SyncSummary},
    utils::format_elapsed_time,
};
