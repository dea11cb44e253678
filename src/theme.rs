use eframe::egui::{Context, Visuals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(match self {
            Theme::Light => Visuals::light(),
            Theme::Dark => Visuals::dark(),
        });
    }

    pub fn cycle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }
}

/// Presentation hook for a dropdown instance. Colors come from the active
/// egui visuals; this only fixes the geometry.
#[derive(Debug, Clone, Copy)]
pub struct DropdownStyle {
    /// Width of the closed trigger and the panel anchored under it.
    pub width: f32,
    pub trigger_height: f32,
    /// Vertical gap between the trigger and the panel.
    pub panel_gap: f32,
    /// The option list scrolls beyond this height.
    pub panel_max_height: f32,
}

impl Default for DropdownStyle {
    fn default() -> Self {
        Self {
            width: 295.0,
            trigger_height: 40.0,
            panel_gap: 2.0,
            panel_max_height: 192.0,
        }
    }
}

impl DropdownStyle {
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}
