//! Member Records - the page generator's view of a directory entry
//!
//! Cards are rendered from these records. The helpers here reproduce how the
//! generator serializes a record into card data attributes, so hosts and
//! tests can build cards that look exactly like the real page's.

use serde::{Deserialize, Serialize};

use crate::config::DataKeys;
use crate::types::{LegalName, RawCardData};

/// Marching history of a member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marching {
    pub years_marched: Vec<i32>,
}

/// A directory member as stored by the site
///
/// Only the fields that end up on a card are modeled; other keys in the
/// source JSON are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Display name shown on the card
    pub name: String,

    pub birth_certificate_name: LegalName,

    pub emoji: String,

    #[serde(default)]
    pub marching: Marching,
}

impl MemberRecord {
    pub fn new(name: impl Into<String>, emoji: impl Into<String>, legal_name: LegalName) -> Self {
        Self {
            name: name.into(),
            birth_certificate_name: legal_name,
            emoji: emoji.into(),
            marching: Marching::default(),
        }
    }

    pub fn with_years(mut self, years: impl Into<Vec<i32>>) -> Self {
        self.marching.years_marched = years.into();
        self
    }

    /// Parse a JSON array of member records.
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }

    /// The data attributes the generator emits for this member's card.
    pub fn card_data(&self) -> serde_json::Result<RawCardData> {
        Ok(RawCardData {
            name: Some(self.name.clone()),
            emoji: Some(self.emoji.clone()),
            legal_name: Some(legal_name_json(&self.birth_certificate_name)?),
            years_marched: Some(format_years(&self.marching.years_marched)),
        })
    }
}

/// Compact JSON object for a legal name; an empty middle name is omitted.
pub fn legal_name_json(name: &LegalName) -> serde_json::Result<String> {
    serde_json::to_string(name)
}

/// `[2019, 2020]` → `"2019, 2020"`
pub fn format_years(years: &[i32]) -> String {
    years
        .iter()
        .map(|year| year.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl DataKeys {
    /// `(attribute, value)` pairs for every present field of `data`
    pub fn data_attributes(&self, data: &RawCardData) -> Vec<(String, String)> {
        [
            (&self.name, &data.name),
            (&self.emoji, &data.emoji),
            (&self.legal_name, &data.legal_name),
            (&self.years_marched, &data.years_marched),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|value| (DataKeys::attribute_name(key), value.clone()))
        })
        .collect()
    }
}
