//! Engine shared between the attach handle and the input listener.

use std::cell::RefCell;
use std::rc::Rc;

use rollcall_core::Engine;

use crate::dom::{DomCard, DomMedia};

pub type DomEngine = Engine<DomCard, DomMedia>;

/// Shared engine type for the page.
///
/// Single-threaded: the listener borrows it mutably for one pass at a time,
/// and no pass yields before it completes.
pub type SharedEngine = Rc<RefCell<DomEngine>>;

pub fn share(engine: DomEngine) -> SharedEngine {
    Rc::new(RefCell::new(engine))
}
