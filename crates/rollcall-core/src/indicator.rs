//! Fallback indicator control
//!
//! Drives the single "no results" media element. It is shown and played from
//! the start when every card is hidden, and hidden and paused otherwise.
//!
//! ```text
//!   Hidden/Paused ── all hidden ──▶ seek to start, show, play ──▶ Shown/Playing
//!   Shown/Playing ── some visible ─▶ hide, pause ──────────────▶ Hidden/Paused
//! ```
//!
//! Re-entering the current state performs no writes.

use tracing::debug;

use crate::adapter::FallbackMedia;
use crate::types::Visibility;

/// What the filtered set looks like after a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Desired {
    /// Every card is hidden (including the zero-card case)
    AllHidden,
    SomeVisible,
}

impl Desired {
    pub fn from_counts(hidden: usize, total: usize) -> Self {
        if hidden == total {
            Desired::AllHidden
        } else {
            Desired::SomeVisible
        }
    }
}

/// Owns the fallback media element, if the page has exactly one
#[derive(Debug)]
pub struct IndicatorController<M> {
    media: Option<M>,
}

impl<M: FallbackMedia> IndicatorController<M> {
    /// Wrap the page's indicator. With `None` every call is a no-op.
    pub fn new(media: Option<M>) -> Self {
        if media.is_none() {
            debug!("No fallback indicator; indicator updates disabled");
        }
        Self { media }
    }

    pub fn is_enabled(&self) -> bool {
        self.media.is_some()
    }

    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }

    /// Hide and pause unconditionally.
    ///
    /// Run once at attach time; the markup may default the element to visible.
    pub fn force_hidden(&mut self) {
        if let Some(media) = self.media.as_mut() {
            media.set_visibility(Visibility::Hidden);
            media.pause();
        }
    }

    /// Move the indicator to the state implied by the hidden/total counts.
    pub fn reconcile_indicator(&mut self, hidden: usize, total: usize) {
        let Some(media) = self.media.as_mut() else {
            return;
        };

        match Desired::from_counts(hidden, total) {
            Desired::AllHidden => {
                if media.visibility() == Some(Visibility::Shown) {
                    return;
                }
                debug!(hidden, total, "All cards hidden, showing fallback indicator");
                media.seek_to_start();
                media.set_visibility(Visibility::Shown);
                media.play();
            }
            Desired::SomeVisible => {
                if media.visibility() == Some(Visibility::Hidden) {
                    return;
                }
                media.set_visibility(Visibility::Hidden);
                media.pause();
            }
        }
    }
}
