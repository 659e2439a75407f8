use super::*;

fn state(pairs: &[(&str, StyleValue)]) -> StyleState {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

#[test]
fn untagged_serde_distinguishes_kinds() {
    let s = state(&[
        ("background", StyleValue::Color(Rgba8::opaque(30, 58, 95))),
        ("gauge", StyleValue::Number(0.25)),
        ("family", StyleValue::Keyword("serif".to_string())),
    ]);
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(
        json,
        r##"{"background":"#1e3a5f","family":"serif","gauge":0.25}"##
    );
    let back: StyleState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn matched_keys_interpolate_by_kind() {
    let a = state(&[
        ("bg", StyleValue::Color(Rgba8::opaque(0, 0, 0))),
        ("gauge", StyleValue::Number(0.0)),
    ]);
    let b = state(&[
        ("bg", StyleValue::Color(Rgba8::opaque(200, 100, 50))),
        ("gauge", StyleValue::Number(1.0)),
    ]);
    let mid = StyleState::lerp(&a, &b, 0.5);
    assert_eq!(
        mid.get("bg"),
        Some(&StyleValue::Color(Rgba8::opaque(100, 50, 25)))
    );
    assert_eq!(mid.get("gauge"), Some(&StyleValue::Number(0.5)));
}

#[test]
fn keywords_hold_left_value_until_segment_completes() {
    let a = StyleValue::Keyword("solid".to_string());
    let b = StyleValue::Keyword("dashed".to_string());
    assert_eq!(StyleValue::lerp(&a, &b, 0.0), a);
    assert_eq!(StyleValue::lerp(&a, &b, 0.99), a);
    assert_eq!(StyleValue::lerp(&a, &b, 1.0), b);
}

#[test]
fn mismatched_kinds_behave_like_keywords() {
    let a = StyleValue::Number(3.0);
    let b = StyleValue::Keyword("auto".to_string());
    assert_eq!(StyleValue::lerp(&a, &b, 0.5), a);
    assert_eq!(StyleValue::lerp(&a, &b, 1.0), b);
}

#[test]
fn keys_missing_from_either_side_are_dropped() {
    let a = state(&[
        ("bg", StyleValue::Number(0.0)),
        ("only_a", StyleValue::Number(1.0)),
    ]);
    let b = state(&[
        ("bg", StyleValue::Number(10.0)),
        ("only_b", StyleValue::Number(2.0)),
    ]);
    let mid = StyleState::lerp(&a, &b, 0.5);
    assert_eq!(mid.len(), 1);
    assert_eq!(mid.get("bg"), Some(&StyleValue::Number(5.0)));
}

#[test]
fn iteration_order_is_stable() {
    let s = state(&[
        ("zeta", StyleValue::Number(1.0)),
        ("alpha", StyleValue::Number(2.0)),
    ]);
    let keys: Vec<&str> = s.keys().collect();
    assert_eq!(keys, vec!["alpha", "zeta"]);
}
