//! Shape detection for untyped color input.
//!
//! Callers hand the normalizer whatever a UI produced: a hex string, a color
//! keyword, or an object of channel values edited through sliders. This
//! module turns that JSON value into a [`ColorInput`] so conversion can
//! dispatch on an explicit variant instead of probing keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::hex::is_valid_hex_str;

/// Input channel that triggered a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSource {
    Hex,
    Rgb,
    Hsl,
    Hsv,
}

impl ColorSource {
    /// Parse a source tag as written by UI components (`"hex"`, `"rgb"`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "hex" => Some(Self::Hex),
            "rgb" => Some(Self::Rgb),
            "hsl" => Some(Self::Hsl),
            "hsv" => Some(Self::Hsv),
            _ => None,
        }
    }

    /// The tag string for this source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
        }
    }
}

impl std::fmt::Display for ColorSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Red/green/blue channels, each 0-255.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbChannels {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

/// Hue/saturation/lightness channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslChannels {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: Option<f64>,
}

/// Hue/saturation/value channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvChannels {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: Option<f64>,
}

/// A color input after shape detection.
///
/// Channel values are already normalized: `r`/`g`/`b` in 0-255, `h` in
/// 0-360, `s`/`l`/`v`/`a` in 0-1. `NaN` survives normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// A valid hex string (3, 6 or 8 digits, optional `#`)
    Hex {
        value: String,
        source: Option<ColorSource>,
        hue: Option<f64>,
    },
    /// Any other string: named color or CSS color function
    Keyword {
        value: String,
        source: Option<ColorSource>,
        hue: Option<f64>,
    },
    /// `hue` is a stray `h` key sent alongside the channels, if any
    Rgb {
        channels: RgbChannels,
        source: Option<ColorSource>,
        hue: Option<f64>,
    },
    Hsl {
        channels: HslChannels,
        source: Option<ColorSource>,
    },
    Hsv {
        channels: HsvChannels,
        source: Option<ColorSource>,
    },
    /// Numbers, arrays, booleans and objects without a known channel set
    Unrecognized,
}

impl ColorInput {
    /// Detect the shape of a JSON color value.
    ///
    /// Object inputs are checked in order: `hex`, then `r`/`g`/`b`, then
    /// `h`/`s`/`v`, then `h`/`s`/`l`. An explicit `source` tag on the object
    /// wins over the detected shape.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::from_str_with_source(s, None, None),
            Value::Object(map) => Self::from_object(map),
            _ => Self::Unrecognized,
        }
    }

    fn from_str_with_source(s: &str, source: Option<ColorSource>, hue: Option<f64>) -> Self {
        if is_valid_hex_str(s) {
            Self::Hex {
                value: s.to_string(),
                source,
                hue,
            }
        } else {
            Self::Keyword {
                value: s.to_string(),
                source,
                hue,
            }
        }
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        let tagged = map
            .get("source")
            .and_then(Value::as_str)
            .and_then(ColorSource::from_tag);
        let has = |key: &str| map.get(key).is_some_and(|v| !v.is_null());
        let channel = |key: &str, read: fn(&Value) -> f64| map.get(key).map_or(f64::NAN, read);
        let alpha = map.get("a").filter(|v| !v.is_null()).map(alpha_channel);
        let hue = map.get("h").filter(|v| !v.is_null()).map(hue_channel);

        let detected = if let Some(hex) = map.get("hex").filter(|v| !v.is_null()) {
            let source = tagged.or(Some(ColorSource::Hex));
            match hex.as_str() {
                Some(s) => Self::from_str_with_source(s, source, hue),
                None => Self::Unrecognized,
            }
        } else if has("r") && has("g") && has("b") {
            Self::Rgb {
                channels: RgbChannels {
                    r: channel("r", rgb_channel),
                    g: channel("g", rgb_channel),
                    b: channel("b", rgb_channel),
                    a: alpha,
                },
                source: tagged.or(Some(ColorSource::Rgb)),
                hue,
            }
        } else if has("h") && has("s") && has("v") {
            Self::Hsv {
                channels: HsvChannels {
                    h: channel("h", hue_channel),
                    s: channel("s", unit_channel),
                    v: channel("v", unit_channel),
                    a: alpha,
                },
                source: tagged.or(Some(ColorSource::Hsv)),
            }
        } else if has("h") && has("s") && has("l") {
            Self::Hsl {
                channels: HslChannels {
                    h: channel("h", hue_channel),
                    s: channel("s", unit_channel),
                    l: channel("l", unit_channel),
                    a: alpha,
                },
                source: tagged.or(Some(ColorSource::Hsl)),
            }
        } else {
            Self::Unrecognized
        };

        debug!(shape = detected.shape_name(), "Detected color input shape");
        detected
    }

    /// The source tag carried by this input, if any.
    pub fn source(&self) -> Option<ColorSource> {
        match self {
            Self::Hex { source, .. }
            | Self::Keyword { source, .. }
            | Self::Rgb { source, .. }
            | Self::Hsl { source, .. }
            | Self::Hsv { source, .. } => *source,
            Self::Unrecognized => None,
        }
    }

    /// The hue the caller supplied directly through an `h` key.
    pub fn input_hue(&self) -> Option<f64> {
        match self {
            Self::Hex { hue, .. } | Self::Keyword { hue, .. } | Self::Rgb { hue, .. } => *hue,
            Self::Hsl { channels, .. } => Some(channels.h),
            Self::Hsv { channels, .. } => Some(channels.h),
            Self::Unrecognized => None,
        }
    }

    fn shape_name(&self) -> &'static str {
        match self {
            Self::Hex { .. } => "hex",
            Self::Keyword { .. } => "keyword",
            Self::Rgb { .. } => "rgb",
            Self::Hsl { .. } => "hsl",
            Self::Hsv { .. } => "hsv",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// A raw channel value: a plain number or a percentage of the channel's range.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Channel {
    Number(f64),
    Percent(f64),
}

impl Channel {
    /// Read a channel value; anything that is not numeric becomes `NaN`.
    fn read(value: &Value) -> Self {
        match value {
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => {
                let s = s.trim();
                match s.strip_suffix('%') {
                    Some(pct) => Self::Percent(pct.trim().parse().unwrap_or(f64::NAN)),
                    None => Self::Number(s.parse().unwrap_or(f64::NAN)),
                }
            }
            _ => Self::Number(f64::NAN),
        }
    }

    /// Scale to `0..=max`. Numbers are taken as-is, percents as a share of `max`.
    fn bounded(self, max: f64) -> f64 {
        match self {
            Self::Number(n) => n.clamp(0.0, max),
            Self::Percent(p) => p.clamp(0.0, 100.0) / 100.0 * max,
        }
    }

    /// Scale to `0..=1`. Numbers above 1 are read as percentages.
    fn unit(self) -> f64 {
        match self {
            Self::Number(n) if n <= 1.0 => n.clamp(0.0, 1.0),
            Self::Number(n) => (n / 100.0).clamp(0.0, 1.0),
            Self::Percent(p) => p.clamp(0.0, 100.0) / 100.0,
        }
    }
}

// f64::clamp returns NaN for NaN, so NaN channels survive normalization.
fn rgb_channel(value: &Value) -> f64 {
    Channel::read(value).bounded(255.0)
}

fn hue_channel(value: &Value) -> f64 {
    Channel::read(value).bounded(360.0)
}

fn unit_channel(value: &Value) -> f64 {
    Channel::read(value).unit()
}

fn alpha_channel(value: &Value) -> f64 {
    Channel::read(value).bounded(1.0)
}
