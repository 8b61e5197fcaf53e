// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Localized content files of questions.

/// Token put by the template where the question title belongs.
pub const TITLE_PLACEHOLDER: &str = "TODO_REPLACE_TITLE";

/// Extension of the content files.
pub const CONTENT_FILE_EXTENSION: &str = "mdx";

#[must_use]
pub fn contains_placeholder(text: &str) -> bool {
    text.contains(TITLE_PLACEHOLDER)
}

/// Replaces the first title placeholder with `title` and makes sure the text ends with a newline.
///
/// Text without the placeholder is returned unchanged apart from the trailing newline.
#[must_use]
pub fn patch(text: &str, title: &str) -> String {
    let mut patched = text.replacen(TITLE_PLACEHOLDER, title, 1);
    if !patched.ends_with('\n') {
        patched.push('\n');
    }
    patched
}
