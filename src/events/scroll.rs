use crate::dom::{self, Listener};
use crate::frame::Surface;
use crate::overlay;
use reel_core::{HorizontalExtent, RegionBounds, ViewportGeometry};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements the horizontal scroll mode reads its geometry from.
#[derive(Clone)]
pub struct HorizontalParts {
    pub region: web::Element,
    pub track: web::Element,
}

#[inline]
pub fn track_extent(track: &web::Element) -> HorizontalExtent {
    HorizontalExtent {
        scroll_width: track.scroll_width() as f64,
        client_width: track.client_width() as f64,
    }
}

/// Region bounds projected into the viewport's coordinate space.
pub fn viewport_geometry(
    viewport: &web::Element,
    horizontal: Option<&HorizontalParts>,
) -> ViewportGeometry {
    let frame = viewport.get_bounding_client_rect();
    ViewportGeometry {
        height: dom::viewport_height(viewport),
        region: horizontal.map(|h| {
            let rect = h.region.get_bounding_client_rect();
            RegionBounds {
                top: rect.top() - frame.top(),
                bottom: rect.bottom() - frame.top(),
            }
        }),
    }
}

pub fn wire_scroll(
    surface: Rc<Surface>,
    viewport: web::Element,
    horizontal: Option<HorizontalParts>,
) -> Listener {
    let target = viewport.clone();
    Listener::passive(&target, "scroll", move |_ev| {
        let scroll_top = viewport.scroll_top() as f64;
        let geometry = viewport_geometry(&viewport, horizontal.as_ref());
        surface.with_stage(|stage, sink, now| stage.on_scroll(scroll_top, geometry, now, sink));
    })
}

/// Wheel input over the viewport; cancelled while horizontal mode owns it.
pub fn wire_wheel(surface: Rc<Surface>, viewport: &web::Element, track: web::Element) -> Listener {
    Listener::active(viewport, "wheel", move |ev| {
        let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        let extent = track_extent(&track);
        let outcome =
            surface.with_stage(|stage, sink, _| stage.on_wheel(wheel.delta_y(), extent, sink));
        if outcome.suppresses_default() {
            ev.prevent_default();
        }
    })
}

/// Keep the core's track position in step with scrollbar drags.
pub fn wire_track_scroll(surface: Rc<Surface>, track: web::Element) -> Listener {
    let target = track.clone();
    Listener::passive(&target, "scroll", move |_ev| {
        let extent = track_extent(&track);
        surface
            .stage
            .borrow_mut()
            .sync_scroll_left(track.scroll_left() as f64, extent);
    })
}

pub fn wire_resize(
    surface: Rc<Surface>,
    viewport: web::Element,
    film: Option<web::HtmlElement>,
) -> Option<Listener> {
    let window = web::window()?;
    Some(Listener::passive(&window, "resize", move |_ev| {
        if let Some(film) = &film {
            overlay::sync_film_size(film, &viewport);
        }
        let width = dom::viewport_width(&viewport);
        surface.stage.borrow_mut().resize(width);
    }))
}
