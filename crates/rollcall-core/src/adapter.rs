//! Element adapter traits
//!
//! The engine only talks to the page through these traits. Implementations
//! own the concrete element handles; see `memory` for an in-process version
//! and the `rollcall` crate for the browser one.

use crate::config::DataKeys;
use crate::types::{RawCardData, Visibility};

/// One directory card on the page
pub trait CardElement {
    /// Current display state, or `None` if the element has not been set
    /// explicitly shown or hidden yet.
    fn visibility(&self) -> Option<Visibility>;

    fn set_visibility(&mut self, visibility: Visibility);

    /// Read the card's data attributes under the given dataset keys.
    fn raw_data(&self, keys: &DataKeys) -> RawCardData;
}

/// The "no results" media element
pub trait FallbackMedia {
    /// Current display state, or `None` if not set explicitly.
    fn visibility(&self) -> Option<Visibility>;

    fn set_visibility(&mut self, visibility: Visibility);

    /// Move the playback position back to the beginning of the media.
    fn seek_to_start(&mut self);

    fn play(&mut self);

    fn pause(&mut self);
}
