//! Color normalization entry points used by picker components.
//!
//! Inputs are `Option<&Value>`: `None` stands for an absent value, and JSON
//! `null` is treated the same way.

use serde_json::Value;
#[cfg(debug_assertions)]
use tracing::instrument;

use crate::error::ColorError;
use crate::input::ColorInput;
use crate::state::ColorState;

/// Guard against absent input.
///
/// Fails only for `None` and `null`. Every other value, however malformed,
/// is returned unchanged; object shapes are not inspected.
///
/// # Example
///
/// ```
/// use chromastate::normalize::validate;
/// use serde_json::json;
///
/// let data = json!({"r": "NaN"});
/// assert!(std::ptr::eq(validate(Some(&data)).unwrap(), &data));
/// assert!(validate(None).is_err());
/// ```
pub fn validate(input: Option<&Value>) -> Result<&Value, ColorError> {
    match input {
        None => Err(ColorError::InvalidInput { found: "undefined" }),
        Some(Value::Null) => Err(ColorError::InvalidInput { found: "null" }),
        Some(value) => Ok(value),
    }
}

/// Convert any color input into a [`ColorState`].
///
/// `old_hue` is the hue of the caller's previous state; pass it on every call
/// so achromatic colors keep the hue the user last chose.
///
/// # Errors
///
/// Returns [`ColorError::InvalidInput`] for absent or `null` input. Any other
/// input produces a state, with `NaN` channels when it can't be interpreted.
///
/// # Example
///
/// ```
/// use chromastate::normalize::to_state;
/// use serde_json::json;
///
/// let state = to_state(Some(&json!("red")), None).unwrap();
/// assert_eq!(state.hex, "#ff0000");
/// assert_eq!(state.rgb.r, 255.0);
/// assert_eq!(state.source, None);
/// ```
#[cfg_attr(debug_assertions, instrument(skip(input)))]
pub fn to_state(input: Option<&Value>, old_hue: Option<f64>) -> Result<ColorState, ColorError> {
    let value = validate(input)?;
    let detected = ColorInput::from_value(value);
    Ok(ColorState::from_input(&detected, old_hue))
}
