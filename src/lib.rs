//! QuickPick - a searchable dropdown widget for egui.
//!
//! The widget lives in [`dropdown`]; [`config`], [`lookup`] and [`theme`]
//! carry the demo app's plumbing.

pub mod config;
pub mod dropdown;
pub mod lookup;
pub mod theme;
