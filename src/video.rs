use crate::constants::{SECTION_MUTE_THRESHOLD, SECTION_SELECTOR, UNMUTE_TOGGLE_SELECTOR};
use crate::dom::{self, Listener, Observer};
use reel_core::MuteIcon;
use wasm_bindgen::JsCast;
use web_sys as web;

fn target_video(document: &web::Document, link: &web::Element) -> Option<web::HtmlMediaElement> {
    let id = link.get_attribute("data-target")?;
    document
        .get_element_by_id(&id)?
        .dyn_into::<web::HtmlMediaElement>()
        .ok()
}

pub fn sync_unmute_icon(link: &web::Element, video: Option<&web::HtmlMediaElement>) {
    let Ok(Some(icon)) = link.query_selector("i") else {
        return;
    };
    let state = MuteIcon::for_video(video.map(|v| v.muted()));
    let cl = icon.class_list();
    _ = cl.remove_1(state.stale_icon_class());
    _ = cl.add_1(state.icon_class());
    _ = link.set_attribute("aria-label", state.aria_label());
    _ = link.set_attribute("title", state.title());
    _ = link.set_attribute("aria-pressed", state.aria_pressed());
}

pub fn mute_all_and_sync(document: &web::Document) {
    for el in dom::query_all(document, "video") {
        if let Ok(video) = el.dyn_into::<web::HtmlMediaElement>() {
            video.set_muted(true);
        }
    }
    for link in dom::query_all(document, UNMUTE_TOGGLE_SELECTOR) {
        sync_unmute_icon(&link, target_video(document, &link).as_ref());
    }
}

/// Wire each mute toggle link to its `data-target` video.
pub fn wire_unmute_toggles(document: &web::Document) -> Vec<Listener> {
    dom::query_all(document, UNMUTE_TOGGLE_SELECTOR)
        .into_iter()
        .map(|link| {
            sync_unmute_icon(&link, target_video(document, &link).as_ref());
            let doc = document.clone();
            let link_click = link.clone();
            Listener::active(&link, "click", move |ev| {
                ev.prevent_default();
                let Some(video) = target_video(&doc, &link_click) else {
                    return;
                };
                if video.muted() {
                    video.set_muted(false);
                    video.set_volume(1.0);
                } else {
                    video.set_muted(true);
                }
                log::info!("[video] muted={}", video.muted());
                sync_unmute_icon(&link_click, Some(&video));
            })
        })
        .collect()
}

/// Mute everything whenever a section that holds a video becomes the visible one.
pub fn observe_sections(
    document: &web::Document,
    root: Option<&web::Element>,
) -> Option<Observer> {
    let sections = dom::query_all(document, SECTION_SELECTOR);
    if sections.is_empty() {
        return None;
    }
    let doc = document.clone();
    match Observer::new(root, SECTION_MUTE_THRESHOLD, move |section| {
        if matches!(section.query_selector("video"), Ok(Some(_))) {
            mute_all_and_sync(&doc);
        }
    }) {
        Ok(observer) => {
            observer.observe_all(&sections);
            Some(observer)
        }
        Err(e) => {
            log::warn!("[video] section observer unavailable: {:?}", e);
            None
        }
    }
}
