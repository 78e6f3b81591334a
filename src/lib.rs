//! Color state normalization for color pickers.
//!
//! Converts hex strings, color keywords and channel objects into a
//! [`ColorState`] carrying the same color as hex, RGB, HSL and HSV, and
//! models the preset swatch row that feeds it.

pub mod cli;
pub mod config;
pub mod error;
pub mod hex;
pub mod input;
pub mod logging;
pub mod normalize;
pub mod presets;
pub mod state;

pub use error::ColorError;
pub use hex::is_valid_hex;
pub use input::{ColorInput, ColorSource};
pub use normalize::{to_state, validate};
pub use presets::{ColorChange, PresetColors};
pub use state::ColorState;
