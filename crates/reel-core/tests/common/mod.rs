#![allow(dead_code)]
use reel_core::{LayerUpdate, RenderSink};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Translate(f64),
    Layers(LayerUpdate),
    ScrollLeft(f64),
    HeaderLogo(bool),
}

/// Sink that records every command in emission order.
#[derive(Default)]
pub struct RecordingSink {
    pub commands: Vec<Command>,
}

impl RecordingSink {
    pub fn layer_updates(&self) -> Vec<&LayerUpdate> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Layers(u) => Some(u),
                _ => None,
            })
            .collect()
    }

    /// Active layer of each update that carried no transition (cycle steps).
    pub fn cycle_steps(&self) -> Vec<usize> {
        self.layer_updates()
            .into_iter()
            .filter(|u| u.transition.is_none())
            .filter_map(|u| u.active_layer())
            .collect()
    }

    pub fn translations(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Translate(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderSink for RecordingSink {
    fn translate_film(&mut self, offset_px: f64) {
        self.commands.push(Command::Translate(offset_px));
    }
    fn apply_layers(&mut self, update: &LayerUpdate) {
        self.commands.push(Command::Layers(update.clone()));
    }
    fn scroll_region_to(&mut self, scroll_left: f64) {
        self.commands.push(Command::ScrollLeft(scroll_left));
    }
    fn set_header_logo_visible(&mut self, visible: bool) {
        self.commands.push(Command::HeaderLogo(visible));
    }
}

pub fn ms(v: u64) -> std::time::Duration {
    std::time::Duration::from_millis(v)
}
