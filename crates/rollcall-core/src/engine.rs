//! Rollcall Engine - one attached search over one page's cards
//!
//! The engine owns the card list and the fallback indicator for its lifetime.
//! Each input event runs one synchronous pass:
//!
//! ```text
//! term ──▶ reconcile(cards) ──▶ hidden count ──▶ reconcile_indicator(hidden, total)
//! ```

use tracing::{debug, info};

use crate::adapter::{CardElement, FallbackMedia};
use crate::config::DataKeys;
use crate::error::FilterResult;
use crate::indicator::IndicatorController;
use crate::reconcile::{reconcile, Card};
use crate::types::{CardAttributes, SearchTerm};

/// Outcome of one search pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// Cards left hidden
    pub hidden: usize,
    /// Cards on the page
    pub total: usize,
}

impl PassSummary {
    pub fn visible(&self) -> usize {
        self.total - self.hidden
    }

    pub fn all_hidden(&self) -> bool {
        self.hidden == self.total
    }
}

#[derive(Debug)]
pub struct Engine<C, M> {
    cards: Vec<Card<C>>,
    indicator: IndicatorController<M>,
}

impl<C: CardElement, M: FallbackMedia> Engine<C, M> {
    /// Take ownership of the page's cards and optional indicator.
    ///
    /// The indicator is forced hidden and paused first, whatever the cards
    /// hold. Every card's data attributes are then parsed up front; the first
    /// malformed card aborts the attach.
    pub fn attach(
        elements: impl IntoIterator<Item = C>,
        indicator: Option<M>,
        keys: &DataKeys,
    ) -> FilterResult<Self> {
        let mut indicator = IndicatorController::new(indicator);
        indicator.force_hidden();

        let cards = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                let attributes = CardAttributes::parse(index, element.raw_data(keys), keys)?;
                Ok(Card::new(element, attributes))
            })
            .collect::<FilterResult<Vec<_>>>()?;

        info!(
            cards = cards.len(),
            indicator = indicator.is_enabled(),
            "Directory search attached"
        );

        Ok(Self { cards, indicator })
    }

    /// Run one search pass for the raw search box text.
    pub fn on_input(&mut self, raw_term: &str) -> PassSummary {
        let term = SearchTerm::new(raw_term);
        let total = self.cards.len();
        let hidden = reconcile(&term, &mut self.cards);
        self.indicator.reconcile_indicator(hidden, total);

        debug!(term = term.as_str(), hidden, total, "Search pass complete");
        PassSummary { hidden, total }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    pub fn indicator(&self) -> &IndicatorController<M> {
        &self.indicator
    }
}
