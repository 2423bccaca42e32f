//! Screen-Space GUI State
//!
//! Widget state for the menu-driven screens. These types only hold state
//! and answer hit-tests; drawing lives in `render`, and the decision of
//! what a click means lives in `game::state`.
//!
//! # Available Components
//!
//! - [`MainMenu`] - ordered entries with a wrapping selection cursor
//! - [`SettingsPanel`] - language toggle, volume slider, drag state
//! - [`layout`] - fixed geometry shared by drawing and hit-testing

pub mod layout;
pub mod menu;
pub mod settings;

pub use menu::{MainMenu, MenuAction};
pub use settings::{SettingsPanel, SettingsTarget};
