use smartconverter_core::{
    slug_id, Clipboard, Command, ConversionSession, Dispatcher, Feedback, NoopFeedback,
    SessionConfig, SessionView,
};
use std::time::Duration;

#[derive(Default)]
struct RecordingClipboard {
    writes: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> std::io::Result<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingFeedback {
    impacts: usize,
}

impl Feedback for RecordingFeedback {
    fn impact(&mut self) {
        self.impacts += 1;
    }
}

fn new_dispatcher() -> Dispatcher<RecordingClipboard, RecordingFeedback> {
    Dispatcher::new(
        ConversionSession::new(),
        RecordingClipboard::default(),
        RecordingFeedback::default(),
    )
}

fn displayed(view: &SessionView, slug: &str) -> String {
    view.result(slug_id(slug))
        .expect("result card should exist")
        .formatted_value
        .clone()
}

#[test]
fn input_100_shows_temperature_results() {
    let mut dispatcher = new_dispatcher();
    dispatcher.set_input("100");

    let view = dispatcher.view();
    assert_eq!(view.numeric_value, 100.0);
    assert_eq!(displayed(&view, "temperature.celsius_to_fahrenheit"), "212");
    assert_eq!(displayed(&view, "temperature.fahrenheit_to_celsius"), "37.78");
    assert_eq!(displayed(&view, "length.meters_to_feet"), "328.08");
    assert_eq!(displayed(&view, "weight.kg_to_lbs"), "220.46");
    assert_eq!(displayed(&view, "speed.kmh_to_mph"), "62.14");
}

#[test]
fn empty_input_shows_zero_on_every_card() {
    let mut dispatcher = new_dispatcher();
    dispatcher.set_input("");

    let view = dispatcher.view();
    assert_eq!(view.results().count(), 9);
    for result in view.results() {
        assert_eq!(result.formatted_value, "0", "{} should show 0", result.label);
    }
}

#[test]
fn non_numeric_input_converts_from_zero() {
    let mut dispatcher = new_dispatcher();
    dispatcher.set_input("abc");

    let view = dispatcher.view();
    assert_eq!(view.numeric_value, 0.0);
    assert_eq!(displayed(&view, "temperature.celsius_to_fahrenheit"), "32");
    assert_eq!(displayed(&view, "temperature.fahrenheit_to_celsius"), "-17.78");
    assert_eq!(displayed(&view, "length.meters_to_feet"), "0");
}

#[test]
fn large_results_are_grouped() {
    let mut dispatcher = new_dispatcher();
    dispatcher.set_input("1000");

    let view = dispatcher.view();
    assert_eq!(displayed(&view, "length.miles_to_km"), "1,609.34");
    assert_eq!(displayed(&view, "weight.kg_to_lbs"), "2,204.62");
}

#[test]
fn copy_writes_displayed_text_and_marks_card() {
    let mut dispatcher = new_dispatcher();
    let id = slug_id("temperature.fahrenheit_to_celsius");
    dispatcher.set_input("100");
    dispatcher.copy(id);

    assert_eq!(dispatcher.clipboard().writes, vec!["37.78".to_string()]);
    assert_eq!(dispatcher.feedback().impacts, 1);

    let view = dispatcher.view();
    assert_eq!(view.highlighted_conversion_id, Some(id));
    let copied = view.results().filter(|r| r.is_copied).collect::<Vec<_>>();
    assert_eq!(copied.len(), 1);
    assert_eq!(copied[0].conversion_id, id);
}

#[test]
fn copy_on_empty_input_copies_literal_zero() {
    let mut dispatcher = new_dispatcher();
    dispatcher.copy(slug_id("temperature.celsius_to_fahrenheit"));
    assert_eq!(dispatcher.clipboard().writes, vec!["0".to_string()]);
}

#[test]
fn stale_timer_does_not_clear_newer_highlight() {
    let mut dispatcher = new_dispatcher();
    let first = slug_id("length.meters_to_feet");
    let second = slug_id("weight.lbs_to_kg");

    dispatcher.copy(first);
    assert_eq!(dispatcher.session().highlighted_conversion_id(), Some(first));
    dispatcher.copy(second);
    assert_eq!(dispatcher.session().highlighted_conversion_id(), Some(second));

    // Both timers share the same due time; the first one fires first and
    // fails the identity check, the second one clears.
    dispatcher.advance(Duration::from_millis(1_999));
    assert_eq!(dispatcher.session().highlighted_conversion_id(), Some(second));
    assert_eq!(dispatcher.advance(Duration::from_millis(1)), 2);
    assert_eq!(dispatcher.session().highlighted_conversion_id(), None);
}

#[test]
fn older_timer_fires_before_newer_copy_expires() {
    let mut dispatcher = new_dispatcher();
    let first = slug_id("speed.kmh_to_mph");
    let second = slug_id("speed.mph_to_kmh");

    dispatcher.copy(first);
    dispatcher.advance(Duration::from_millis(1_500));
    dispatcher.copy(second);

    assert_eq!(dispatcher.advance(Duration::from_millis(500)), 1);
    assert_eq!(dispatcher.session().highlighted_conversion_id(), Some(second));

    assert_eq!(dispatcher.advance(Duration::from_millis(1_500)), 1);
    assert_eq!(dispatcher.session().highlighted_conversion_id(), None);
}

#[test]
fn recopying_same_id_is_cleared_by_the_earliest_timer() {
    let mut dispatcher = new_dispatcher();
    let id = slug_id("weight.kg_to_lbs");

    dispatcher.copy(id);
    dispatcher.advance(Duration::from_secs(1));
    dispatcher.copy(id);

    dispatcher.advance(Duration::from_secs(1));
    assert_eq!(dispatcher.session().highlighted_conversion_id(), None);
    assert_eq!(dispatcher.pending_len(), 1);
}

#[test]
fn set_input_twice_yields_identical_views() {
    let mut dispatcher = new_dispatcher();
    dispatcher.set_input("42.5");
    let first = dispatcher.view();
    dispatcher.set_input("42.5");
    let second = dispatcher.view();
    assert_eq!(first, second);
}

#[test]
fn custom_delay_controls_highlight_lifetime() {
    let session = ConversionSession::with_config(SessionConfig {
        highlight_clear_delay: Duration::from_millis(500),
        ..SessionConfig::default()
    })
    .expect("valid config");
    let mut dispatcher = Dispatcher::new(
        session,
        RecordingClipboard::default(),
        RecordingFeedback::default(),
    );
    let id = slug_id("length.feet_to_meters");

    dispatcher.dispatch(Command::Copy(id));
    dispatcher.advance(Duration::from_millis(500));
    assert_eq!(dispatcher.session().highlighted_conversion_id(), None);
}

#[test]
fn session_view_serializes_expected_wire_fields() {
    let mut session = ConversionSession::new();
    session.set_input("1");
    let id = slug_id("length.meters_to_feet");
    session.copy(id);

    let json = serde_json::to_value(session.view()).unwrap();
    assert_eq!(json["raw_input"], "1");
    assert_eq!(json["numeric_value"], 1.0);
    assert_eq!(json["highlighted_conversion_id"], id.to_string());
    let card = &json["categories"][1]["results"][0];
    assert_eq!(card["formatted_value"], "3.28");
    assert_eq!(card["is_copied"], true);
}

#[test]
fn overflowing_numeral_converts_to_infinity() {
    let mut dispatcher = new_dispatcher();
    dispatcher.set_input("1e400");

    let view = dispatcher.view();
    assert_eq!(view.numeric_value, f64::INFINITY);
    assert_eq!(displayed(&view, "temperature.celsius_to_fahrenheit"), "∞");
    assert_eq!(displayed(&view, "length.feet_to_meters"), "∞");

    dispatcher.set_input("-1e400");
    assert_eq!(displayed(&dispatcher.view(), "weight.kg_to_lbs"), "-∞");
}

#[test]
fn noop_feedback_still_runs_copy_effects() {
    let mut dispatcher = Dispatcher::new(
        ConversionSession::new(),
        RecordingClipboard::default(),
        NoopFeedback,
    );
    let id = slug_id("length.miles_to_km");
    dispatcher.set_input("1");
    dispatcher.copy(id);

    assert_eq!(dispatcher.clipboard().writes, vec!["1.61".to_string()]);
    assert_eq!(dispatcher.session().highlighted_conversion_id(), Some(id));
    assert_eq!(dispatcher.pending_len(), 1);
}
