//! Preset swatch row for sketch-style pickers.
//!
//! Holds the list of one-click colors a picker offers and turns a click on a
//! swatch into the change event the picker forwards to its color state.
//! Rendering is left to the UI layer.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::input::{ColorInput, ColorSource};
use crate::state::ColorState;

/// Swatches shown by the sketch picker when none are configured.
pub const DEFAULT_PRESETS: [&str; 15] = [
    "#D0021B", "#F5A623", "#F8E71C", "#8B572A", "#7ED321", "#417505", "#BD10E0", "#9013FE",
    "#4A90E2", "#50E3C2", "#B8E986", "#000000", "#4A4A4A", "#9B9B9B", "#FFFFFF",
];

/// An ordered list of preset colors.
///
/// Equality compares the color lists, so a UI can skip re-rendering a row
/// whose presets did not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetColors {
    colors: Vec<String>,
}

/// A single rendered swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch<'a> {
    /// Stable identity for the swatch within its row
    pub key: &'a str,
    /// CSS background of the swatch square
    pub background: &'a str,
}

/// Change event emitted when a preset swatch is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorChange {
    /// The preset color string exactly as configured
    pub hex: String,
    pub source: ColorSource,
}

impl PresetColors {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether the row should be hidden: a row without presets is not shown.
    pub fn is_hidden(&self) -> bool {
        self.is_empty()
    }

    /// Swatches in display order.
    pub fn swatches(&self) -> impl Iterator<Item = Swatch<'_>> {
        self.colors.iter().map(|color| Swatch {
            key: color,
            background: color,
        })
    }

    /// Handle a click on the swatch for `color`.
    ///
    /// Returns `None` when `color` is not one of the presets.
    pub fn select(&self, color: &str) -> Option<ColorChange> {
        self.colors
            .iter()
            .find(|c| c.as_str() == color)
            .map(|c| ColorChange {
                hex: c.clone(),
                source: ColorSource::Hex,
            })
    }
}

impl Default for PresetColors {
    fn default() -> Self {
        Self::new(DEFAULT_PRESETS)
    }
}

impl ColorChange {
    /// The event as the JSON object picker components exchange.
    pub fn to_value(&self) -> Value {
        json!({
            "hex": self.hex,
            "source": self.source,
        })
    }

    /// Resolve the event into a full color state.
    pub fn to_state(&self, old_hue: Option<f64>) -> ColorState {
        ColorState::from_input(&ColorInput::from_value(&self.to_value()), old_hue)
    }
}
