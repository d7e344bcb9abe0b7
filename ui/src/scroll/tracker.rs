//! Scroll-derived UI state.
//!
//! [`ScrollTracker::on_scroll`] is pure apart from remembering the previous
//! position, so every rule here can be exercised without a browser.

use crate::config::ScrollConfig;

/// One `section[id]` as laid out right now.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: i32,
    pub height: i32,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: i32, height: i32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: i64) -> bool {
        let top = self.top as i64;
        y >= top && y < top + self.height as i64
    }
}

/// `scrolled` drives the background, `hidden` the vertical offset; both can be on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarMode {
    pub scrolled: bool,
    pub hidden: bool,
}

impl NavbarMode {
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollFrame {
    pub navbar: NavbarMode,
    pub back_to_top: bool,
    pub active_section: Option<String>,
    pub parallax_px: f64,
}

pub struct ScrollTracker {
    config: ScrollConfig,
    previous: u32,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Self {
        Self::with_previous(config, 0)
    }

    pub fn with_previous(config: ScrollConfig, previous: u32) -> Self {
        Self { config, previous }
    }

    pub fn previous(&self) -> u32 {
        self.previous
    }

    pub fn on_scroll(
        &mut self,
        current: u32,
        header_height: i32,
        sections: &[SectionBounds],
    ) -> ScrollFrame {
        let cfg = &self.config;

        let navbar = NavbarMode {
            scrolled: current > cfg.scrolled_after,
            hidden: current > self.previous && current > cfg.hide_after,
        };

        let frame = ScrollFrame {
            navbar,
            back_to_top: current > cfg.back_to_top_after,
            active_section: active_section(current, header_height, cfg.highlight_lead, sections)
                .map(str::to_owned),
            parallax_px: current as f64 * cfg.parallax_speed,
        };

        self.previous = current;
        frame
    }
}

/// Last section (document order) containing `position + header_height + lead`.
pub fn active_section(
    position: u32,
    header_height: i32,
    lead: i32,
    sections: &[SectionBounds],
) -> Option<&str> {
    let probe = position as i64 + header_height as i64 + lead as i64;

    sections
        .iter()
        .filter(|s| s.contains(probe))
        .last()
        .map(|s| s.id.as_str())
}

/// Window `scrollY` as a position; overscroll bounce can report negatives.
pub fn clamp_position(scroll_y: f64) -> u32 {
    if scroll_y.is_finite() && scroll_y > 0.0 {
        scroll_y.round().min(u32::MAX as f64) as u32
    } else {
        0
    }
}
