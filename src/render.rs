use crate::constants::HEADER_LOGO_VISIBLE_CLASS;
use crate::style;
use reel_core::{LayerUpdate, RenderSink};
use web_sys as web;

/// Render sink writing core commands into inline styles and classes.
pub struct DomSink {
    pub film: Option<web::HtmlElement>,
    pub noise_layers: Vec<web::HtmlElement>,
    pub track: Option<web::Element>,
    pub header_logo: Option<web::Element>,
}

impl RenderSink for DomSink {
    fn translate_film(&mut self, offset_px: f64) {
        if let Some(film) = &self.film {
            _ = film
                .style()
                .set_property("transform", &style::translate_y(offset_px));
        }
    }

    fn apply_layers(&mut self, update: &LayerUpdate) {
        let transition = update.transition.map(style::opacity_transition);
        for (layer, opacity) in self.noise_layers.iter().zip(update.opacities.iter()) {
            let css = layer.style();
            if let Some(t) = &transition {
                _ = css.set_property("transition", t);
            }
            _ = css.set_property("opacity", &style::opacity(*opacity));
        }
    }

    fn scroll_region_to(&mut self, scroll_left: f64) {
        if let Some(track) = &self.track {
            track.set_scroll_left(scroll_left.round() as i32);
        }
    }

    fn set_header_logo_visible(&mut self, visible: bool) {
        if let Some(logo) = &self.header_logo {
            let cl = logo.class_list();
            if visible {
                _ = cl.add_1(HEADER_LOGO_VISIBLE_CLASS);
            } else {
                _ = cl.remove_1(HEADER_LOGO_VISIBLE_CLASS);
            }
        }
    }
}
