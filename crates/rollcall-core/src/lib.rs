//! Rollcall Core Library
//!
//! Live filtering for a directory of member profile cards.
//!
//! ## Overview
//!
//! Each keystroke in the directory's search box runs one pass:
//!
//! - **Matcher**: does the term appear in a card's name, emoji, legal name or
//!   years marched?
//! - **Reconciler**: show matching cards, hide the rest, skip cards already in
//!   the right state, and count what ended up hidden.
//! - **Indicator controller**: when every card is hidden, show the fallback
//!   media and play it from the start; otherwise hide and pause it.
//!
//! The engine never touches the page directly. It works through the
//! [`CardElement`] and [`FallbackMedia`] adapter traits.
//!
//! ## Quick Start
//!
//! ```
//! use rollcall_core::memory::{MemoryCard, MemoryMedia};
//! use rollcall_core::{DataKeys, Engine, LegalName, MemberRecord};
//!
//! let cards = vec![
//!     MemoryCard::from_record(&MemberRecord::new("Alice Stone", "🥁", LegalName::new("Alice", "Stone")))?,
//!     MemoryCard::from_record(&MemberRecord::new("Carol Reed", "🎺", LegalName::new("Carol", "Reed")))?,
//! ];
//!
//! let mut engine = Engine::attach(cards, Some(MemoryMedia::default()), &DataKeys::default())?;
//! let summary = engine.on_input("stone");
//! assert_eq!(summary.hidden, 1);
//! # Ok::<(), rollcall_core::FilterError>(())
//! ```

pub mod adapter;
pub mod config;
pub mod engine;
pub mod error;
pub mod indicator;
pub mod logging;
pub mod markup;
pub mod matcher;
pub mod memory;
pub mod reconcile;
pub mod types;

// Re-exports
pub use adapter::{CardElement, FallbackMedia};
pub use config::{DataKeys, SelectorConfig};
pub use engine::{Engine, PassSummary};
pub use error::{FilterError, FilterResult};
pub use indicator::{Desired, IndicatorController};
pub use markup::MemberRecord;
pub use matcher::matches;
pub use reconcile::{reconcile, Card};
pub use types::*;
