//! Card visibility reconciliation
//!
//! Brings every card's display state in line with whether it matches the
//! current term, writing only where the state actually changes.

use crate::adapter::CardElement;
use crate::matcher::matches;
use crate::types::{CardAttributes, SearchTerm, Visibility};

/// A card element paired with its parsed attributes
#[derive(Debug)]
pub struct Card<C> {
    pub element: C,
    pub attributes: CardAttributes,
}

impl<C: CardElement> Card<C> {
    pub fn new(element: C, attributes: CardAttributes) -> Self {
        Self {
            element,
            attributes,
        }
    }

    /// Apply the desired visibility for `term`; returns the resulting state.
    fn apply(&mut self, term: &SearchTerm) -> Visibility {
        let desired = Visibility::from_matched(matches(term, &self.attributes));
        if self.element.visibility() != Some(desired) {
            self.element.set_visibility(desired);
        }
        desired
    }
}

/// Show matching cards, hide the rest, and return how many ended up hidden.
///
/// Every card is visited exactly once. Cards already in their desired state
/// are not written, but still count toward the total if hidden.
pub fn reconcile<C: CardElement>(term: &SearchTerm, cards: &mut [Card<C>]) -> usize {
    cards
        .iter_mut()
        .map(|card| card.apply(term))
        .filter(|visibility| visibility.is_hidden())
        .count()
}
