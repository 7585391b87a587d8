use crate::constants::{REVEALED_CLASS, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom::{self, Observer};
use crate::style;
use reel_core::overlay_height;
use web_sys as web;

/// Prepare the film overlay for transform-only animation.
pub fn prepare_film(film: &web::HtmlElement) {
    _ = film.style().set_property("will-change", "transform");
}

/// Keep the film overlay tall enough to cover the viewport while it slides;
/// `top` is pinned once and never animated.
pub fn sync_film_size(film: &web::HtmlElement, viewport: &web::Element) {
    let css = film.style();
    let height = style::px(overlay_height(dom::viewport_height(viewport)));
    if css.get_property_value("height").ok().as_deref() != Some(height.as_str()) {
        _ = css.set_property("height", &height);
    }
    if css
        .get_property_value("top")
        .map(|t| t.is_empty())
        .unwrap_or(true)
    {
        _ = css.set_property("top", "0px");
    }
}

/// Reveal section titles and content the first time they scroll into view.
pub fn observe_reveals(document: &web::Document) -> Option<Observer> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return None;
    }
    match Observer::new(None, REVEAL_THRESHOLD, |el| {
        _ = el.class_list().add_1(REVEALED_CLASS);
    }) {
        Ok(observer) => {
            observer.observe_all(&targets);
            log::info!("[reveal] observing {} blocks", targets.len());
            Some(observer)
        }
        Err(e) => {
            log::warn!("[reveal] observer unavailable: {:?}", e);
            None
        }
    }
}
