//! In-memory element adapters
//!
//! Plain-field implementations of [`CardElement`] and [`FallbackMedia`] that
//! count every write. Used by headless hosts, tests and benchmarks.

use crate::adapter::{CardElement, FallbackMedia};
use crate::config::DataKeys;
use crate::markup::{legal_name_json, MemberRecord};
use crate::types::{CardAttributes, RawCardData, Visibility};

#[derive(Debug, Clone, Default)]
pub struct MemoryCard {
    pub data: RawCardData,
    pub visibility: Option<Visibility>,
    pub visibility_writes: usize,
}

impl MemoryCard {
    pub fn new(data: RawCardData) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    pub fn from_record(record: &MemberRecord) -> serde_json::Result<Self> {
        Ok(Self::new(record.card_data()?))
    }

    pub fn from_attributes(attributes: &CardAttributes) -> serde_json::Result<Self> {
        Ok(Self::new(RawCardData {
            name: Some(attributes.name.clone()),
            emoji: Some(attributes.emoji.clone()),
            legal_name: Some(legal_name_json(&attributes.legal_name)?),
            years_marched: Some(attributes.years_marched.clone()),
        }))
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }
}

impl CardElement for MemoryCard {
    fn visibility(&self) -> Option<Visibility> {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = Some(visibility);
        self.visibility_writes += 1;
    }

    fn raw_data(&self, _keys: &DataKeys) -> RawCardData {
        self.data.clone()
    }
}

/// Media element with a playback position in seconds
#[derive(Debug, Clone, Default)]
pub struct MemoryMedia {
    pub visibility: Option<Visibility>,
    pub playing: bool,
    pub position: f64,
    pub visibility_writes: usize,
    pub seeks: usize,
    pub plays: usize,
    pub pauses: usize,
}

impl MemoryMedia {
    pub fn hidden() -> Self {
        Self {
            visibility: Some(Visibility::Hidden),
            ..Default::default()
        }
    }

    /// Visible and playing, as markup with autoplay would leave it
    pub fn shown_playing() -> Self {
        Self {
            visibility: Some(Visibility::Shown),
            playing: true,
            ..Default::default()
        }
    }
}

impl FallbackMedia for MemoryMedia {
    fn visibility(&self) -> Option<Visibility> {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = Some(visibility);
        self.visibility_writes += 1;
    }

    fn seek_to_start(&mut self) {
        self.position = 0.0;
        self.seeks += 1;
    }

    fn play(&mut self) {
        self.playing = true;
        self.plays += 1;
    }

    fn pause(&mut self) {
        self.playing = false;
        self.pauses += 1;
    }
}
