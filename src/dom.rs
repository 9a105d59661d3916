//! Document adapters
//!
//! The only place that touches `web-sys` element types. Cards and the
//! fallback media are shown with `display: block` and hidden with
//! `display: none`; any other inline value reads as "not set".

use rollcall_core::{CardElement, DataKeys, FallbackMedia, RawCardData, Visibility};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlElement, HtmlVideoElement};

const DISPLAY: &str = "display";

/// Inline `display` value for a visibility
pub fn display_value(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Shown => "block",
        Visibility::Hidden => "none",
    }
}

/// Visibility for an inline `display` value, if it is one we write
pub fn parse_display(value: &str) -> Option<Visibility> {
    match value {
        "block" => Some(Visibility::Shown),
        "none" => Some(Visibility::Hidden),
        _ => None,
    }
}

fn read_display(element: &HtmlElement) -> Option<Visibility> {
    let value = element.style().get_property_value(DISPLAY).ok()?;
    parse_display(&value)
}

fn write_display(element: &HtmlElement, visibility: Visibility) {
    if let Err(err) = element.style().set_property(DISPLAY, display_value(visibility)) {
        warn!(?err, "Failed to set element display");
    }
}

/// A card element with its data attributes
pub struct DomCard {
    element: HtmlElement,
}

impl CardElement for DomCard {
    fn visibility(&self) -> Option<Visibility> {
        read_display(&self.element)
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        write_display(&self.element, visibility);
    }

    fn raw_data(&self, keys: &DataKeys) -> RawCardData {
        let dataset = self.element.dataset();
        RawCardData {
            name: dataset.get(&keys.name),
            emoji: dataset.get(&keys.emoji),
            legal_name: dataset.get(&keys.legal_name),
            years_marched: dataset.get(&keys.years_marched),
        }
    }
}

/// The fallback `<video>` element
pub struct DomMedia {
    video: HtmlVideoElement,
}

impl FallbackMedia for DomMedia {
    fn visibility(&self) -> Option<Visibility> {
        read_display(&self.video)
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        write_display(&self.video, visibility);
    }

    fn seek_to_start(&mut self) {
        self.video.set_current_time(0.0);
    }

    fn play(&mut self) {
        // Rejects when autoplay is blocked; the element stays visible either way.
        match self.video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    warn!(?err, "Fallback media playback was rejected");
                }
            }),
            Err(err) => warn!(?err, "Fallback media could not start playback"),
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.video.pause() {
            warn!(?err, "Fallback media could not pause");
        }
    }
}

/// Snapshot every HTML element carrying `class`, in document order.
pub fn card_elements(document: &Document, class: &str) -> Vec<DomCard> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .filter_map(|element| match element.dyn_into::<HtmlElement>() {
            Ok(element) => Some(DomCard { element }),
            Err(element) => {
                debug!(tag = %element.tag_name(), "Skipping non-HTML card element");
                None
            }
        })
        .collect()
}

/// The fallback media, if exactly one `<video>` carries `class`.
pub fn fallback_media(document: &Document, class: &str) -> Option<DomMedia> {
    let collection = document.get_elements_by_class_name(class);
    if collection.length() != 1 {
        debug!(
            class,
            count = collection.length(),
            "Fallback indicator needs exactly one element"
        );
        return None;
    }

    match collection.item(0)?.dyn_into::<HtmlVideoElement>() {
        Ok(video) => Some(DomMedia { video }),
        Err(element) => {
            debug!(tag = %element.tag_name(), "Fallback indicator is not a video element");
            None
        }
    }
}
