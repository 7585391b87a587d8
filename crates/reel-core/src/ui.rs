//! Small pure decisions behind the page's DOM toggles.

use crate::constants::{MIN_OVERLAY_HEIGHT_PX, OVERLAY_HEIGHT_VIEWPORTS};

#[inline]
pub fn header_logo_visible(scroll_top: f64, threshold: f64) -> bool {
    scroll_top > threshold
}

/// Scroll position that brings a navigation target to the top of the scroller.
#[inline]
pub fn nav_target_offset(scroll_top: f64, target_top: f64, container_top: f64) -> f64 {
    scroll_top + (target_top - container_top)
}

/// Height that keeps the film overlay covering the viewport while it slides.
#[inline]
pub fn overlay_height(viewport_height: f64) -> f64 {
    (viewport_height * OVERLAY_HEIGHT_VIEWPORTS).max(MIN_OVERLAY_HEIGHT_PX)
}

/// Icon state of a video's mute toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MuteIcon {
    Muted,
    Audible,
}

impl MuteIcon {
    /// A missing video counts as muted.
    pub fn for_video(muted: Option<bool>) -> Self {
        match muted {
            Some(false) => MuteIcon::Audible,
            _ => MuteIcon::Muted,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            MuteIcon::Muted => "fa-volume-xmark",
            MuteIcon::Audible => "fa-volume-high",
        }
    }

    /// The class that has to be removed when switching to this variant.
    pub fn stale_icon_class(self) -> &'static str {
        match self {
            MuteIcon::Muted => MuteIcon::Audible.icon_class(),
            MuteIcon::Audible => MuteIcon::Muted.icon_class(),
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            MuteIcon::Muted => "Unmute video",
            MuteIcon::Audible => "Mute video",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MuteIcon::Muted => "Unmute",
            MuteIcon::Audible => "Mute",
        }
    }

    pub fn aria_pressed(self) -> &'static str {
        match self {
            MuteIcon::Muted => "false",
            MuteIcon::Audible => "true",
        }
    }
}
