//! Card Types - attributes carried by each directory card
//!
//! A card's attributes are fixed when the page is generated. The only state
//! that changes afterwards is its [`Visibility`].

use serde::{Deserialize, Serialize};

use crate::config::DataKeys;
use crate::error::{FilterError, FilterResult};

/// Binary display state of a card or the fallback indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// `Shown` for a matching card, `Hidden` otherwise
    pub fn from_matched(matched: bool) -> Self {
        if matched {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_hidden(self) -> bool {
        self == Visibility::Hidden
    }
}

/// Legal name as serialized into the card's data attribute
///
/// Field order is `first`, `middle`, `last`, as the generator writes it.
/// `middle` is omitted when empty; JSON `null` is read the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalName {
    pub first: String,

    #[serde(default, skip_serializing_if = "is_blank")]
    pub middle: Option<String>,

    pub last: String,
}

fn is_blank(middle: &Option<String>) -> bool {
    middle.as_deref().map_or(true, str::is_empty)
}

impl LegalName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            middle: None,
            last: last.into(),
        }
    }

    pub fn with_middle(mut self, middle: impl Into<String>) -> Self {
        self.middle = Some(middle.into());
        self
    }
}

/// Data attributes exactly as read off a card element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCardData {
    pub name: Option<String>,
    pub emoji: Option<String>,
    /// JSON object string, e.g. `{"first":"Jo","last":"Lin"}`
    pub legal_name: Option<String>,
    pub years_marched: Option<String>,
}

/// Validated card attributes consumed by the matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAttributes {
    pub name: String,
    pub emoji: String,
    pub legal_name: LegalName,
    /// Free text, e.g. `"2019, 2020"`
    pub years_marched: String,
}

impl CardAttributes {
    pub fn new(
        name: impl Into<String>,
        emoji: impl Into<String>,
        legal_name: LegalName,
        years_marched: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            legal_name,
            years_marched: years_marched.into(),
        }
    }

    /// Validate the raw data of the card at position `card`.
    ///
    /// Fails on the first missing attribute, then on a legal name that is not
    /// valid JSON or lacks `first`/`last`.
    pub fn parse(card: usize, raw: RawCardData, keys: &DataKeys) -> FilterResult<Self> {
        let missing = |attribute: &str| FilterError::MissingAttribute {
            card,
            attribute: attribute.to_string(),
        };

        let name = raw.name.ok_or_else(|| missing(&keys.name))?;
        let emoji = raw.emoji.ok_or_else(|| missing(&keys.emoji))?;
        let legal_name = raw.legal_name.ok_or_else(|| missing(&keys.legal_name))?;
        let years_marched = raw.years_marched.ok_or_else(|| missing(&keys.years_marched))?;

        let legal_name: LegalName = serde_json::from_str(&legal_name)
            .map_err(|source| FilterError::MalformedLegalName { card, source })?;

        Ok(Self {
            name,
            emoji,
            legal_name,
            years_marched,
        })
    }
}

/// Search box text, lower-cased once per pass
///
/// Surrounding whitespace is kept: a term of spaces matches any field that
/// contains those spaces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
