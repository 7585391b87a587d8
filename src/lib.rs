#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::dom::{Listener, Observer};
use crate::events::HorizontalParts;
use crate::frame::{FrameLoop, Surface};
use crate::render::DomSink;
use reel_core::{FilmLayout, Stage, StageLayout, StageParams};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod style;
mod video;

/// Everything that has to be torn down together when the page goes away.
struct App {
    surface: Rc<Surface>,
    frame_loop: FrameLoop,
    _listeners: Vec<Listener>,
    _observers: Vec<Observer>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Restart grain cycling, e.g. after a jump-navigation elsewhere on the page.
#[wasm_bindgen(js_name = startNoise)]
pub fn start_noise() {
    APP.with(|app| {
        if let Some(app) = app.borrow().as_ref() {
            app.surface
                .with_stage(|stage, sink, now| stage.start_noise(now, sink));
        }
    });
}

/// Stop grain cycling and let the layers settle after the fade delay.
#[wasm_bindgen(js_name = stopNoise)]
pub fn stop_noise() {
    APP.with(|app| {
        if let Some(app) = app.borrow().as_ref() {
            let now = app.surface.now();
            app.surface.stage.borrow_mut().stop_noise(now);
        }
    });
}

#[wasm_bindgen(js_name = scrollToNextSection)]
pub fn scroll_to_next_section(button: web::Element) {
    events::scroll_to_next_section(&button);
}

/// Cancel the frame loop, drop every listener and observer, and dispose the stage.
#[wasm_bindgen]
pub fn dispose() {
    let Some(app) = APP.with(|app| app.borrow_mut().take()) else {
        return;
    };
    app.frame_loop.cancel();
    app.surface.stage.borrow_mut().dispose();
    log::info!("reel-web disposed");
}

fn find_horizontal(document: &web::Document) -> Option<HorizontalParts> {
    Some(HorizontalParts {
        region: dom::query(document, HORIZONTAL_REGION_SELECTOR)?,
        track: dom::query(document, HORIZONTAL_TRACK_SELECTOR)?,
    })
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await?;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("init already ran; ignoring");
        return Ok(());
    }

    let viewport = dom::query(&document, VIEWPORT_SELECTOR);
    let film = match (&viewport, dom::query_html(&document, FILM_OVERLAY_SELECTOR)) {
        (Some(_), Some(film)) => Some(film),
        _ => {
            log::warn!(
                "[film] {} or {} missing; film motion skipped",
                FILM_OVERLAY_SELECTOR,
                VIEWPORT_SELECTOR
            );
            None
        }
    };
    let noise_layers: Vec<web::HtmlElement> = dom::query_all(&document, NOISE_LAYER_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    if noise_layers.is_empty() {
        log::warn!("[noise] no {} layers; grain skipped", NOISE_LAYER_SELECTOR);
    }
    let header_logo = viewport
        .as_ref()
        .and_then(|_| dom::query(&document, HEADER_LOGO_SELECTOR));
    let horizontal = viewport.as_ref().and_then(|_| find_horizontal(&document));
    if viewport.is_some() && horizontal.is_none() {
        log::info!("[scroll-mode] no horizontal section; wheel left untouched");
    }

    let layout = StageLayout {
        film: film.as_ref().zip(viewport.as_ref()).map(|(f, vp)| {
            overlay::prepare_film(f);
            overlay::sync_film_size(f, vp);
            FilmLayout {
                viewport_width: dom::viewport_width(vp),
                scroll_top: vp.scroll_top() as f64,
            }
        }),
        noise_layers: noise_layers.len(),
        horizontal_region: horizontal.is_some(),
        header_logo: header_logo.is_some(),
    };
    log::info!(
        "[stage] film={} noise_layers={} horizontal={} header_logo={}",
        layout.film.is_some(),
        layout.noise_layers,
        layout.horizontal_region,
        layout.header_logo
    );

    let sink = DomSink {
        film: film.clone(),
        noise_layers,
        track: horizontal.as_ref().map(|h| h.track.clone()),
        header_logo,
    };
    let surface = Rc::new(Surface::new(
        Stage::new(StageParams::default(), layout),
        sink,
    ));

    let mut listeners = Vec::new();
    let mut observers = Vec::new();
    if let Some(vp) = &viewport {
        listeners.push(events::wire_scroll(
            surface.clone(),
            vp.clone(),
            horizontal.clone(),
        ));
        listeners.extend(events::wire_resize(surface.clone(), vp.clone(), film));
        listeners.extend(events::wire_nav_links(&document, surface.clone(), vp.clone()));
        if let Some(h) = &horizontal {
            listeners.push(events::wire_wheel(surface.clone(), vp, h.track.clone()));
            listeners.push(events::wire_track_scroll(surface.clone(), h.track.clone()));
        }
    }
    listeners.extend(video::wire_unmute_toggles(&document));
    observers.extend(overlay::observe_reveals(&document));
    observers.extend(video::observe_sections(&document, viewport.as_ref()));

    // Grain runs from page load
    surface.with_stage(|stage, sink, now| stage.start_noise(now, sink));
    let frame_loop = frame::start_loop(surface.clone());

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            surface,
            frame_loop,
            _listeners: listeners,
            _observers: observers,
        })
    });
    Ok(())
}
