use super::*;
use crate::foundation::core::{Rgba8, Size};
use crate::interp::style::StyleValue;
use crate::mapper::progress::ProgressScope;
use crate::reveal::intersect::InsetValue;
use crate::theme::dsl::ThemeBuilder;
use crate::theme::model::RevealSpec;

fn style(bg: &str) -> StyleState {
    StyleState::from_iter([(
        "background".to_string(),
        StyleValue::Color(Rgba8::from_hex(bg).unwrap()),
    )])
}

fn theme() -> ThemeSpec {
    ThemeBuilder::new("test-theme")
        .stop(0.0, style("#000000"))
        .stop(1.0, style("#ffffff"))
        .reveal("hero", RevealSpec::with_margin(InsetValue::Px(-40.0)))
        .unwrap()
        .reveal("stats", RevealSpec::default())
        .unwrap()
        .build()
        .unwrap()
}

fn snap(scroll_top: f64) -> ScrollSnapshot {
    ScrollSnapshot::new(scroll_top, Size::new(1280.0, 800.0), 4000.0)
}

#[test]
fn session_wires_one_controller_per_reveal() {
    let session = PageSession::new(&theme()).unwrap();
    assert!(session.reveal("hero").is_some());
    assert!(session.reveal("stats").is_some());
    assert!(session.reveal("missing").is_none());
    // Ambient mapper plus two controllers share the one signal.
    assert_eq!(session.signal().subscriber_count(), 3);
}

#[test]
fn ambient_state_tracks_scroll() {
    let session = PageSession::new(&theme()).unwrap();
    assert_eq!(session.current_state(), style("#000000"));

    session.publish(snap(1600.0));
    session.on_frame();
    assert_eq!(session.progress().get(), 0.5);
    assert_eq!(session.current_state(), style("#808080"));
}

#[test]
fn reveals_flip_once_and_stick() {
    let session = PageSession::new(&theme()).unwrap();
    session
        .set_element_bounds("stats", Rect::new(0.0, 2000.0, 1280.0, 2200.0))
        .unwrap();
    session.publish(snap(0.0));
    session.on_frame();
    assert!(!session.has_entered("stats"));

    session.publish(snap(1500.0));
    session.on_frame();
    assert!(session.has_entered("stats"));

    session.publish(snap(0.0));
    session.on_frame();
    assert!(session.has_entered("stats"));
}

#[test]
fn unknown_reveal_ids_read_as_revealed() {
    let session = PageSession::new(&theme()).unwrap();
    // Fail open: a wiring bug must not permanently hide content.
    assert!(session.has_entered("typo-id"));
    assert!(
        session
            .set_element_bounds("typo-id", Rect::new(0.0, 0.0, 1.0, 1.0))
            .is_err()
    );
}

#[test]
fn invalid_themes_are_rejected_at_session_build() {
    let bad = ThemeSpec {
        name: "bad".to_string(),
        scope: ProgressScope::Page,
        stops: vec![],
        reveals: BTreeMap::new(),
    };
    assert!(PageSession::new(&bad).is_err());
}

#[test]
fn degraded_sessions_reveal_everything_immediately() {
    let session = PageSession::degraded(&theme()).unwrap();
    assert!(session.has_entered("hero"));
    assert!(session.has_entered("stats"));
    // The ambient mapper still works.
    session.publish(snap(3200.0));
    session.on_frame();
    assert_eq!(session.progress(), Progress::ONE);
}

#[test]
fn frame_reports_everything_a_renderer_reads() {
    let session = PageSession::new(&theme()).unwrap();
    session
        .set_element_bounds("hero", Rect::new(0.0, 100.0, 1280.0, 300.0))
        .unwrap();
    session.publish(snap(0.0));
    session.on_frame();

    let frame = session.frame();
    assert_eq!(frame.progress, 0.0);
    assert_eq!(frame.state, style("#000000"));
    assert!(frame.revealed["hero"]);
    assert!(!frame.revealed["stats"]);

    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["state"]["background"], "#000000");
    assert_eq!(json["revealed"]["hero"], true);
}
