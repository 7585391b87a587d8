use crate::constants::NAV_LINK_SELECTOR;
use crate::dom::{self, Listener};
use crate::frame::Surface;
use reel_core::nav_target_offset;
use std::rc::Rc;
use web_sys as web;

fn smooth_scroll_to(viewport: &web::Element, top: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    viewport.scroll_to_with_scroll_to_options(&opts);
}

/// In-page navigation: resync the grain and glide the viewport to the anchor.
pub fn wire_nav_links(
    document: &web::Document,
    surface: Rc<Surface>,
    viewport: web::Element,
) -> Vec<Listener> {
    dom::query_all(document, NAV_LINK_SELECTOR)
        .into_iter()
        .map(|link| {
            let doc = document.clone();
            let surface = surface.clone();
            let viewport = viewport.clone();
            let link_click = link.clone();
            Listener::active(&link, "click", move |ev| {
                ev.prevent_default();
                let Some(href) = link_click.get_attribute("href") else {
                    return;
                };
                let target_id = href.get(1..).unwrap_or_default();
                let Some(target) = doc.get_element_by_id(target_id) else {
                    log::warn!("[nav] no element for {}", href);
                    return;
                };
                let top = nav_target_offset(
                    viewport.scroll_top() as f64,
                    target.get_bounding_client_rect().top(),
                    viewport.get_bounding_client_rect().top(),
                );
                surface.with_stage(|stage, sink, now| stage.start_noise(now, sink));
                smooth_scroll_to(&viewport, top);
            })
        })
        .collect()
}

/// Smooth-scroll from the section holding `button` to the one after it.
pub fn scroll_to_next_section(button: &web::Element) {
    let Ok(Some(section)) = button.closest("section") else {
        return;
    };
    if let Some(next) = section.next_element_sibling() {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        next.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
