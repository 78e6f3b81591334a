//! Canonical color state in every supported representation.

use csscolorparser::Color as CssColor;
use float_cmp::approx_eq;
use palette::convert::FromColorUnclamped;
use palette::{Hsl, Hsv, Srgb, encoding};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::hex::{format_hex, parse_hex};
use crate::input::{ColorInput, ColorSource};

/// RGB channels: `r`/`g`/`b` rounded to whole numbers in 0-255, `a` in 0-1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// HSL channels: `h` in degrees 0-360, `s`/`l`/`a` in 0-1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

/// HSV channels: `h` in degrees 0-360, `s`/`v`/`a` in 0-1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

/// One color in every representation a picker displays.
///
/// All four representations denote the same color modulo rounding. For
/// achromatic colors the hue in `hsl` and `hsv` is the carried-over hue
/// rather than a computed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorState {
    /// `#rrggbb`, lowercase
    pub hex: String,
    pub rgb: Rgba,
    pub hsl: Hsla,
    pub hsv: Hsva,
    /// Last meaningful hue, kept so achromatic colors don't reset hue sliders
    #[serde(rename = "oldHue")]
    pub old_hue: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<ColorSource>,
}

impl ColorState {
    /// Build the state for a detected input.
    ///
    /// `old_hue` is the hue of the previous state, used when the new color
    /// has no hue of its own; values outside 0-360 are wrapped. Never fails:
    /// nonsensical input yields `NaN` channels.
    pub fn from_input(input: &ColorInput, old_hue: Option<f64>) -> Self {
        let old_hue = old_hue.map(wrap_hue);
        let (rgb, alpha) = canonical_rgb(input);
        let mut state = Self::from_canonical(rgb, alpha, old_hue);

        // A hue typed by the caller outlives the color it was typed for.
        state.old_hue = [input.input_hue().map(wrap_hue), old_hue]
            .into_iter()
            .flatten()
            .find(|h| is_truthy(*h))
            .unwrap_or(state.hsl.h);
        state.source = input.source();
        state
    }

    /// Build a state from canonical 0-255 channels and a 0-1 alpha.
    fn from_canonical(rgb: Srgb<f64>, alpha: f64, old_hue: Option<f64>) -> Self {
        let finite = rgb_is_finite(rgb);
        let (mut hsl, mut hsv) = if finite {
            let unit = Srgb::new(rgb.red / 255.0, rgb.green / 255.0, rgb.blue / 255.0);
            let hsl = Hsl::<encoding::Srgb, f64>::from_color_unclamped(unit);
            let hsv = Hsv::<encoding::Srgb, f64>::from_color_unclamped(unit);
            (
                Hsla {
                    h: hsl.hue.into_positive_degrees(),
                    s: hsl.saturation,
                    l: hsl.lightness,
                    a: alpha,
                },
                Hsva {
                    h: hsv.hue.into_positive_degrees(),
                    s: hsv.saturation,
                    v: hsv.value,
                    a: alpha,
                },
            )
        } else {
            (
                Hsla {
                    h: f64::NAN,
                    s: f64::NAN,
                    l: f64::NAN,
                    a: alpha,
                },
                Hsva {
                    h: f64::NAN,
                    s: f64::NAN,
                    v: f64::NAN,
                    a: alpha,
                },
            )
        };

        if approx_eq!(f64, hsl.s, 0.0, epsilon = 1e-12) {
            let carried = old_hue.filter(|h| is_truthy(*h)).unwrap_or(0.0);
            hsl.h = carried;
            hsv.h = carried;
        }

        let rgba = if finite {
            Rgba {
                r: rgb.red.round(),
                g: rgb.green.round(),
                b: rgb.blue.round(),
                a: alpha,
            }
        } else {
            Rgba {
                r: f64::NAN,
                g: f64::NAN,
                b: f64::NAN,
                a: alpha,
            }
        };

        Self {
            hex: format_hex(rgb),
            rgb: rgba,
            hsl,
            hsv,
            old_hue: hsl.h,
            source: None,
        }
    }

    /// True when every channel of every representation is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.rgb.r, self.rgb.g, self.rgb.b, self.rgb.a, self.hsl.h, self.hsl.s, self.hsl.l,
            self.hsv.h, self.hsv.s, self.hsv.v,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Resolve any input shape to 0-255 sRGB channels plus alpha.
fn canonical_rgb(input: &ColorInput) -> (Srgb<f64>, f64) {
    match input {
        ColorInput::Hex { value, .. } => parse_hex(value).unwrap_or_else(nan_rgb),
        ColorInput::Keyword { value, .. } => match value.parse::<CssColor>() {
            Ok(css) => (
                Srgb::new(
                    snap_to_byte(f64::from(css.r) * 255.0),
                    snap_to_byte(f64::from(css.g) * 255.0),
                    snap_to_byte(f64::from(css.b) * 255.0),
                ),
                snap_to_byte(f64::from(css.a) * 255.0) / 255.0,
            ),
            Err(e) => {
                warn!(keyword = %value, error = %e, "Unresolvable color keyword");
                nan_rgb()
            }
        },
        ColorInput::Rgb { channels, .. } => (
            Srgb::new(channels.r, channels.g, channels.b),
            channels.a.unwrap_or(1.0),
        ),
        ColorInput::Hsl { channels, .. } => {
            let hsl = Hsl::<encoding::Srgb, f64>::new(channels.h, channels.s, channels.l);
            (
                scale_unit_rgb(Srgb::from_color_unclamped(hsl)),
                channels.a.unwrap_or(1.0),
            )
        }
        ColorInput::Hsv { channels, .. } => {
            let hsv = Hsv::<encoding::Srgb, f64>::new(channels.h, channels.s, channels.v);
            (
                scale_unit_rgb(Srgb::from_color_unclamped(hsv)),
                channels.a.unwrap_or(1.0),
            )
        }
        ColorInput::Unrecognized => nan_rgb(),
    }
}

fn scale_unit_rgb(unit: Srgb<f64>) -> Srgb<f64> {
    Srgb::new(unit.red * 255.0, unit.green * 255.0, unit.blue * 255.0)
}

/// csscolorparser stores channels as `f32`; byte-valued colors are snapped
/// back to whole bytes so keywords agree with their hex spelling.
fn snap_to_byte(value: f64) -> f64 {
    let byte = value.round();
    if approx_eq!(f64, value, byte, epsilon = 1e-3) {
        byte
    } else {
        value
    }
}

/// Bring a hue into 0-360. 360 itself is kept, as hue sliders allow it.
fn wrap_hue(hue: f64) -> f64 {
    if (0.0..=360.0).contains(&hue) {
        hue
    } else {
        hue.rem_euclid(360.0)
    }
}

fn nan_rgb() -> (Srgb<f64>, f64) {
    (Srgb::new(f64::NAN, f64::NAN, f64::NAN), 1.0)
}

fn rgb_is_finite(rgb: Srgb<f64>) -> bool {
    rgb.red.is_finite() && rgb.green.is_finite() && rgb.blue.is_finite()
}

/// Zero and `NaN` count as "no hue given".
fn is_truthy(hue: f64) -> bool {
    hue != 0.0 && !hue.is_nan()
}
