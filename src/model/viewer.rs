//! Page view-model: selected language and copy state for one mounted page

use super::catalog::AlgorithmPage;
use super::copy_feedback::CopyFeedback;
use super::language::LanguageTag;
use crate::error::ClipboardError;
use crate::services::{ClipboardWriter, Delivery};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result of a copy attempt
#[derive(Debug)]
pub enum CopyOutcome {
    Copied { bytes: usize, delivery: Delivery },
    Failed(ClipboardError),
}

/// State owned by the page currently on screen
///
/// A new viewer is created every time a page is opened; nothing carries
/// over from the previously opened page.
#[derive(Debug, Clone)]
pub struct CodeViewer {
    page: AlgorithmPage,
    selected: LanguageTag,
    feedback: CopyFeedback,
}

impl CodeViewer {
    pub fn new(page: AlgorithmPage, feedback_duration: Duration) -> Self {
        debug!(slug = %page.slug, language = %page.default_language, "page mounted");
        Self {
            selected: page.default_language,
            page,
            feedback: CopyFeedback::new(feedback_duration),
        }
    }

    pub fn page(&self) -> &AlgorithmPage {
        &self.page
    }

    pub fn selected(&self) -> LanguageTag {
        self.selected
    }

    pub fn feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    /// Languages shown on the tab strip
    pub fn tabs(&self) -> Vec<LanguageTag> {
        self.page.content.languages()
    }

    /// Text of the selected snippet
    pub fn current_text(&self) -> &str {
        // The selection is always a key of the content map
        self.page.content.get(self.selected).unwrap_or_default()
    }

    pub fn current_file_name(&self) -> String {
        self.page.file_name(self.selected)
    }

    /// Select a language tab
    ///
    /// Returns false, leaving the selection untouched, when the page has no
    /// snippet for `language`. The copy indicator is not affected.
    pub fn select_language(&mut self, language: LanguageTag) -> bool {
        if !self.page.content.contains(language) {
            warn!(slug = %self.page.slug, %language, "language not available on page");
            return false;
        }
        if self.selected != language {
            debug!(slug = %self.page.slug, %language, "language selected");
        }
        self.selected = language;
        true
    }

    /// Select by tab position (0-based)
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.tabs().get(index) {
            Some(&language) => self.select_language(language),
            None => false,
        }
    }

    pub fn next_language(&mut self) {
        let tabs = self.tabs();
        if let Some(pos) = tabs.iter().position(|t| *t == self.selected) {
            let next = tabs[(pos + 1) % tabs.len()];
            self.select_language(next);
        }
    }

    pub fn previous_language(&mut self) {
        let tabs = self.tabs();
        if let Some(pos) = tabs.iter().position(|t| *t == self.selected) {
            let prev = if pos == 0 { tabs.len() - 1 } else { pos - 1 };
            self.select_language(tabs[prev]);
        }
    }

    /// Write the selected snippet to the clipboard
    ///
    /// The indicator shows success only when the write succeeded. Any
    /// pending revert from an earlier copy is replaced.
    pub fn copy_current(&mut self, clipboard: &mut dyn ClipboardWriter, now: Instant) -> CopyOutcome {
        let text = self.current_text();
        let bytes = text.len();
        match clipboard.write_text(text) {
            Ok(delivery) => {
                info!(
                    slug = %self.page.slug,
                    language = %self.selected,
                    bytes,
                    backend = clipboard.name(),
                    ?delivery,
                    "snippet copied"
                );
                match delivery {
                    Delivery::Confirmed => self.feedback.mark_copied(now),
                    Delivery::Sent => self.feedback.mark_sent(now),
                }
                CopyOutcome::Copied { bytes, delivery }
            }
            Err(err) => {
                warn!(slug = %self.page.slug, error = %err, "copy failed");
                self.feedback.mark_failed(now);
                CopyOutcome::Failed(err)
            }
        }
    }

    /// Advance time-based state; returns true if the indicator reverted
    pub fn tick(&mut self, now: Instant) -> bool {
        self.feedback.tick(now)
    }
}
