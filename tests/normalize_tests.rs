use approx::assert_relative_eq;
use chromastate::state::{Hsla, Hsva, Rgba};
use chromastate::{ColorError, ColorSource, to_state, validate};
use serde_json::{Value, json};

// ============================================================================
// validate
// ============================================================================

#[test]
fn validate_throws_on_null() {
    let err = validate(Some(&Value::Null)).unwrap_err();
    assert_eq!(err, ColorError::InvalidInput { found: "null" });
}

#[test]
fn validate_throws_on_undefined() {
    let err = validate(None).unwrap_err();
    assert_eq!(err, ColorError::InvalidInput { found: "undefined" });
    assert!(err.to_string().contains("undefined"));
}

#[test]
fn validate_is_identity_for_everything_else() {
    let inputs = [
        json!(255),
        json!("NaN"),
        json!("ffffff"),
        json!([]),
        json!({"r": 0, "g": 0, "b": 0}),
        json!({"r": "NaN"}),
        json!({"h": "NaN", "s": "NaN", "v": "NaN", "a": "NaN"}),
        json!({"not": "a color"}),
        json!(false),
    ];

    for input in &inputs {
        let out = validate(Some(input)).unwrap();
        assert!(std::ptr::eq(out, input), "{input} should pass through");
    }
}

// ============================================================================
// to_state
// ============================================================================

#[test]
fn to_state_rejects_absent_input() {
    assert!(to_state(None, None).is_err());
    assert!(to_state(Some(&Value::Null), None).is_err());
}

#[test]
fn red_in_all_formats() {
    let state = to_state(Some(&json!("red")), None).unwrap();

    assert_eq!(state.hex, "#ff0000");
    assert_eq!(
        state.rgb,
        Rgba {
            r: 255.0,
            g: 0.0,
            b: 0.0,
            a: 1.0
        }
    );
    assert_eq!(
        state.hsl,
        Hsla {
            h: 0.0,
            s: 1.0,
            l: 0.5,
            a: 1.0
        }
    );
    assert_eq!(
        state.hsv,
        Hsva {
            h: 0.0,
            s: 1.0,
            v: 1.0,
            a: 1.0
        }
    );
    assert_eq!(state.old_hue, 0.0);
    assert_eq!(state.source, None);
}

#[test]
fn blue_hex_has_leading_hash() {
    let state = to_state(Some(&json!("blue")), None).unwrap();
    assert_eq!(state.hex, "#0000ff");
}

#[test]
fn six_digit_hex_round_trips() {
    // Coprime stride so mixed digit pairs are covered.
    for i in (0..=0xffffff_u32).step_by(0x0f0f1) {
        let hex = format!("{:06x}", i);
        let state = to_state(Some(&json!(hex)), None).unwrap();
        assert_eq!(state.hex, format!("#{hex}"));

        let upper = format!("#{}", hex.to_uppercase());
        let state = to_state(Some(&json!(upper)), None).unwrap();
        assert_eq!(state.hex, format!("#{hex}"));
    }
}

#[test]
fn short_and_alpha_hex() {
    let state = to_state(Some(&json!("#0AF")), None).unwrap();
    assert_eq!(state.hex, "#00aaff");
    assert_eq!(state.rgb.a, 1.0);

    let state = to_state(Some(&json!("ff000080")), None).unwrap();
    assert_eq!(state.hex, "#ff0000");
    assert_relative_eq!(state.rgb.a, 128.0 / 255.0, epsilon = 1e-12);
    assert_relative_eq!(state.hsl.a, state.rgb.a, epsilon = 1e-12);
}

#[test]
fn css_functions_and_transparent() {
    let state = to_state(Some(&json!("rgb(0, 128, 0)")), None).unwrap();
    assert_eq!(state.hex, "#008000");

    let state = to_state(Some(&json!("transparent")), None).unwrap();
    assert_eq!(state.hex, "#000000");
    assert_eq!(state.rgb.a, 0.0);
}

#[test]
fn rgb_object_defaults_alpha_and_tags_source() {
    let state = to_state(Some(&json!({"r": 0, "g": 255, "b": 0})), None).unwrap();
    assert_eq!(state.hex, "#00ff00");
    assert_eq!(state.rgb.a, 1.0);
    assert_eq!(state.source, Some(ColorSource::Rgb));
    assert_relative_eq!(state.hsl.h, 120.0, epsilon = 1e-2);
}

#[test]
fn hsl_object_converts() {
    let state = to_state(Some(&json!({"h": 240, "s": 1, "l": 0.5, "a": 0.5})), None).unwrap();
    assert_eq!(state.hex, "#0000ff");
    assert_eq!(state.rgb.a, 0.5);
    assert_eq!(state.source, Some(ColorSource::Hsl));
    assert_relative_eq!(state.hsv.h, 240.0, epsilon = 1e-2);
    assert_relative_eq!(state.hsv.v, 1.0, epsilon = 1e-2);
    assert_eq!(state.old_hue, 240.0);
}

#[test]
fn hsv_object_with_percent_strings() {
    let state = to_state(Some(&json!({"h": 0, "s": "100%", "v": "40%"})), None).unwrap();
    assert_eq!(state.hex, "#660000");
    assert_eq!(state.source, Some(ColorSource::Hsv));
    assert_relative_eq!(state.hsl.l, 0.2, epsilon = 1e-2);
}

#[test]
fn hex_object_uses_explicit_source() {
    let state = to_state(Some(&json!({"hex": "#333", "source": "hex"})), None).unwrap();
    assert_eq!(state.hex, "#333333");
    assert_eq!(state.source, Some(ColorSource::Hex));

    let state = to_state(Some(&json!({"hex": "navy", "source": "rgb"})), None).unwrap();
    assert_eq!(state.hex, "#000080");
    assert_eq!(state.source, Some(ColorSource::Rgb));
}

// ============================================================================
// Hue carry-over
// ============================================================================

#[test]
fn gray_keeps_previous_hue() {
    let state = to_state(Some(&json!("#808080")), Some(200.0)).unwrap();
    assert_eq!(state.hsl.h, 200.0);
    assert_eq!(state.hsv.h, 200.0);
    assert_eq!(state.old_hue, 200.0);
}

#[test]
fn black_and_white_keep_previous_hue() {
    for color in ["black", "white", "#000", "#fff"] {
        let state = to_state(Some(&json!(color)), Some(75.0)).unwrap();
        assert_eq!(state.hsl.s, 0.0, "{color}");
        assert_eq!(state.hsl.h, 75.0, "{color}");
        assert_eq!(state.hsv.h, 75.0, "{color}");
    }
}

#[test]
fn gray_without_previous_hue_defaults_to_zero() {
    let state = to_state(Some(&json!("silver")), None).unwrap();
    assert_eq!(state.hsl.h, 0.0);
    assert_eq!(state.old_hue, 0.0);
}

#[test]
fn chromatic_color_computes_its_own_hue() {
    let state = to_state(Some(&json!("#00ffff")), Some(10.0)).unwrap();
    assert_relative_eq!(state.hsl.h, 180.0, epsilon = 1e-2);
    assert_eq!(state.old_hue, 10.0);
}

#[test]
fn input_hue_wins_for_old_hue() {
    let input = json!({"h": 300, "s": 0, "v": 0.4});
    let state = to_state(Some(&input), Some(120.0)).unwrap();
    assert_eq!(state.old_hue, 300.0);
    assert_eq!(state.hsv.h, 120.0);
    assert_eq!(state.hex, "#666666");
}

#[test]
fn hue_key_on_hex_object_sets_old_hue() {
    let state = to_state(Some(&json!({"hex": "#808080", "h": 120})), None).unwrap();
    assert_eq!(state.old_hue, 120.0);
    assert_eq!(state.hsl.h, 0.0);
    assert_eq!(state.source, Some(ColorSource::Hex));
}

#[test]
fn previous_hue_wraps_into_degrees() {
    let state = to_state(Some(&json!("gray")), Some(-5.0)).unwrap();
    assert_eq!(state.hsl.h, 355.0);
    assert_eq!(state.hsv.h, 355.0);
    assert_eq!(state.old_hue, 355.0);

    let state = to_state(Some(&json!("gray")), Some(480.0)).unwrap();
    assert_eq!(state.hsl.h, 120.0);
}

#[test]
fn keywords_match_their_hex_spelling() {
    for (keyword, hex) in [("gray", "#808080"), ("teal", "#008080"), ("#fff8", "#ffffff88")] {
        let from_keyword = to_state(Some(&json!(keyword)), None).unwrap();
        let from_hex = to_state(Some(&json!(hex)), None).unwrap();
        assert_eq!(from_keyword, from_hex, "{keyword}");
    }
}

// ============================================================================
// Nonsense input degrades to NaN
// ============================================================================

#[test]
fn nan_channel_propagates() {
    let state = to_state(Some(&json!({"r": "NaN", "g": 0, "b": 0})), None).unwrap();
    assert!(state.rgb.r.is_nan());
    assert!(state.rgb.g.is_nan());
    assert!(state.rgb.b.is_nan());
    assert_eq!(state.rgb.a, 1.0);
    assert!(state.hsl.h.is_nan());
    assert!(state.hsv.s.is_nan());
    assert_eq!(state.hex, "#000000");
    assert_eq!(state.source, Some(ColorSource::Rgb));
}

#[test]
fn unknown_keyword_is_nan() {
    let state = to_state(Some(&json!("not-a-color")), None).unwrap();
    assert!(state.rgb.r.is_nan());
    assert!(!state.is_finite());
    assert_eq!(state.rgb.a, 1.0);
}

#[test]
fn numbers_and_partial_objects_are_nan() {
    for input in [json!(0xff0000), json!({"r": 255}), json!([255, 0, 0])] {
        let state = to_state(Some(&input), None).unwrap();
        assert!(!state.is_finite(), "{input}");
        assert_eq!(state.source, None);
    }
}
