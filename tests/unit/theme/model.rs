use super::*;
use crate::foundation::core::{Progress, Rgba8};
use crate::interp::style::{StyleState, StyleValue};

fn stop(position: f64, bg: &str) -> StopSpec {
    StopSpec {
        position,
        ease: crate::interp::ease::Ease::Linear,
        style: StyleState::from_iter([(
            "background".to_string(),
            StyleValue::Color(Rgba8::from_hex(bg).unwrap()),
        )]),
    }
}

fn two_stop_theme() -> ThemeSpec {
    ThemeSpec {
        name: "dusk".to_string(),
        scope: ProgressScope::Page,
        stops: vec![stop(0.0, "#000000"), stop(1.0, "#ffffff")],
        reveals: BTreeMap::new(),
    }
}

#[test]
fn valid_theme_passes_validation() {
    two_stop_theme().validate().unwrap();
}

#[test]
fn theme_json_roundtrip() {
    let mut theme = two_stop_theme();
    theme
        .reveals
        .insert("hero".to_string(), RevealSpec::with_margin(InsetValue::Px(-60.0)));
    let json = serde_json::to_string(&theme).unwrap();
    let back = ThemeSpec::from_json(&json).unwrap();
    assert_eq!(back.name, "dusk");
    assert_eq!(back.stops.len(), 2);
    assert_eq!(
        back.reveals["hero"].insets(),
        EdgeInsets::uniform(InsetValue::Px(-60.0))
    );
}

#[test]
fn margin_accepts_uniform_and_per_edge_forms() {
    let uniform: RevealSpec = serde_json::from_str(r#"{"margin":"-60px"}"#).unwrap();
    assert_eq!(uniform.insets(), EdgeInsets::uniform(InsetValue::Px(-60.0)));

    let edges: RevealSpec = serde_json::from_str(
        r#"{"margin":{"top":"-40px","right":"0px","bottom":"-40px","left":"0px"}}"#,
    )
    .unwrap();
    assert_eq!(edges.insets().top, InsetValue::Px(-40.0));
    assert_eq!(edges.insets().right, InsetValue::Px(0.0));

    let defaulted: RevealSpec = serde_json::from_str("{}").unwrap();
    assert_eq!(defaulted.insets(), EdgeInsets::none());
}

#[test]
fn empty_name_is_rejected() {
    let mut theme = two_stop_theme();
    theme.name = "  ".to_string();
    assert!(theme.validate().is_err());
}

#[test]
fn single_stop_theme_is_rejected() {
    let mut theme = two_stop_theme();
    theme.stops.truncate(1);
    assert!(theme.validate().is_err());
}

#[test]
fn unsorted_stops_are_rejected() {
    let mut theme = two_stop_theme();
    theme.stops.insert(1, stop(1.2, "#123456"));
    assert!(theme.validate().is_err());
}

#[test]
fn stops_must_span_the_unit_interval() {
    let theme = ThemeSpec {
        stops: vec![stop(0.1, "#000000"), stop(1.0, "#ffffff")],
        ..two_stop_theme()
    };
    assert!(theme.validate().is_err());
}

#[test]
fn mismatched_style_keys_are_rejected() {
    let mut theme = two_stop_theme();
    theme.stops[1]
        .style
        .insert("accent", StyleValue::Number(1.0));
    let err = theme.validate().unwrap_err();
    assert!(err.to_string().contains("same style keys"));
}

#[test]
fn negative_element_scope_height_is_rejected() {
    let mut theme = two_stop_theme();
    theme.scope = ProgressScope::Element {
        top: 0.0,
        height: -5.0,
    };
    assert!(theme.validate().is_err());
}

#[test]
fn lowered_table_samples_theme_colors() {
    let table = two_stop_theme().to_table().unwrap();
    let mid = table.sample(Progress::clamped(0.5));
    assert_eq!(
        mid.get("background"),
        Some(&StyleValue::Color(Rgba8::opaque(128, 128, 128)))
    );
}

#[test]
fn from_json_rejects_garbage_and_invalid_themes() {
    assert!(matches!(
        ThemeSpec::from_json("not json"),
        Err(UnfurlError::Serde(_))
    ));
    // Well-formed JSON, ill-formed table.
    let json = r##"{"name":"x","stops":[{"position":0.0,"style":{"bg":"#000000"}}]}"##;
    assert!(matches!(
        ThemeSpec::from_json(json),
        Err(UnfurlError::Table(_))
    ));
}
