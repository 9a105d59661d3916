//! Attach configuration
//!
//! Names the elements and data attributes the engine binds to. Every field
//! has a default matching the directory page markup, so an empty JSON object
//! (or no configuration at all) is valid.

use serde::{Deserialize, Serialize};

use crate::error::FilterResult;

/// Dataset keys (camelCase, as exposed by `element.dataset`) for card attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataKeys {
    pub name: String,
    pub emoji: String,
    pub legal_name: String,
    pub years_marched: String,
}

impl Default for DataKeys {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            emoji: "emoji".to_string(),
            legal_name: "birthCertificateName".to_string(),
            years_marched: "yearsMarched".to_string(),
        }
    }
}

impl DataKeys {
    /// The `data-*` attribute name for a dataset key (`yearsMarched` → `data-years-marched`)
    pub fn attribute_name(key: &str) -> String {
        let mut attribute = String::with_capacity(key.len() + 8);
        attribute.push_str("data-");
        for c in key.chars() {
            if c.is_ascii_uppercase() {
                attribute.push('-');
                attribute.push(c.to_ascii_lowercase());
            } else {
                attribute.push(c);
            }
        }
        attribute
    }
}

/// Element selectors and logging options for one attached engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// Element id of the search text input
    pub search_input_id: String,

    /// Class shared by every card element
    pub card_class: String,

    /// Class of the fallback media element; exactly one must exist for it to be driven
    pub indicator_class: String,

    pub data_keys: DataKeys,

    /// `EnvFilter` directive, e.g. `"info"` or `"rollcall_core=debug"`
    pub log_filter: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            search_input_id: "inputSearch".to_string(),
            card_class: "purdoobah-card".to_string(),
            indicator_class: "archives-incomplete".to_string(),
            data_keys: DataKeys::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl SelectorConfig {
    pub fn from_json(json: &str) -> FilterResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse `json` when given, defaults otherwise
    pub fn from_optional_json(json: Option<&str>) -> FilterResult<Self> {
        match json {
            Some(json) if !json.trim().is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }
}
