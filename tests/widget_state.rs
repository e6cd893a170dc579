// tests/widget_state.rs
//
// Form state machine without any UI: submit / finish / clear.

use cert_lookup::error::LookupError;
use cert_lookup::lookup::{Details, Miss, Outcome};
use cert_lookup::present::{View, NOT_FOUND_MSG};
use cert_lookup::widget::{Widget, WidgetState};

fn filled(cert: &str, last: &str) -> Widget {
    let mut w = Widget::new();
    w.cert_input = cert.into();
    w.last_input = last.into();
    w
}

fn details() -> Details {
    Details {
        first: "Jane".into(),
        last: "Smith".into(),
        number: "12345".into(),
        expires: "2026-01-01".into(),
    }
}

#[test]
fn starts_idle_with_empty_output() {
    let w = Widget::new();
    assert_eq!(w.state(), &WidgetState::Idle);
    assert_eq!(w.view(), View::Empty);
    assert!(!w.is_busy());
}

#[test]
fn blank_fields_show_prompt_and_do_not_load() {
    for (cert, last) in [("", "Smith"), ("123", ""), ("  ", "\t"), ("", "")] {
        let mut w = filled(cert, last);
        assert!(w.submit().is_none());
        assert_eq!(w.state(), &WidgetState::Invalid);
        assert_eq!(w.view(), View::Prompt);
        assert!(!w.is_busy());
    }
}

#[test]
fn valid_submit_enters_loading_with_trimmed_query() {
    let mut w = filled(" 12345 ", " Smith ");
    let sub = w.submit().expect("submission");
    assert_eq!(sub.query.cert(), "12345");
    assert_eq!(sub.query.last(), "Smith");
    assert!(w.is_busy());
    assert_eq!(w.view(), View::Loading);
    assert_eq!(View::Loading.headline(), None);
}

#[test]
fn second_submit_while_loading_is_refused() {
    let mut w = filled("1", "A");
    assert!(w.submit().is_some());
    // Enter key racing the disabled button
    assert!(w.submit().is_none());
    assert!(w.is_busy());
}

#[test]
fn results_land_in_terminal_states() {
    let mut w = filled("12345", "Smith");
    let sub = w.submit().unwrap();
    assert!(w.finish(sub.ticket, Ok(Outcome::Found(details()))));
    assert_eq!(w.view(), View::Found(details()));
    assert!(!w.is_busy());

    let sub = w.submit().unwrap();
    w.finish(sub.ticket, Ok(Outcome::NotFound(Miss::UnknownNumber)));
    assert_eq!(w.view(), View::NotFound);

    let sub = w.submit().unwrap();
    w.finish(sub.ticket, Err(LookupError::Unexpected("boom".into())));
    assert_eq!(w.view(), View::Error);
    assert!(!w.is_busy());
}

#[test]
fn both_kinds_of_miss_look_the_same() {
    let mut a = filled("1", "A");
    let sa = a.submit().unwrap();
    a.finish(sa.ticket, Ok(Outcome::NotFound(Miss::UnknownNumber)));

    let mut b = filled("1", "A");
    let sb = b.submit().unwrap();
    b.finish(sb.ticket, Ok(Outcome::NotFound(Miss::NameMismatch { candidates: 3 })));

    assert_eq!(a.view(), b.view());
    assert_eq!(a.view().headline(), Some(NOT_FOUND_MSG));
}

#[test]
fn error_view_hides_the_cause() {
    let mut w = filled("1", "A");
    let sub = w.submit().unwrap();
    w.finish(sub.ticket, Err(LookupError::Unexpected("secret upstream detail".into())));
    assert!(!w.view().render_text().contains("secret"));
}

#[test]
fn clear_resets_everything_from_any_state() {
    let mut w = filled("12345", "Smith");
    let sub = w.submit().unwrap();
    w.finish(sub.ticket, Ok(Outcome::Found(details())));

    w.clear();
    assert_eq!(w.cert_input, "");
    assert_eq!(w.last_input, "");
    assert_eq!(w.state(), &WidgetState::Idle);
    assert_eq!(w.view(), View::Empty);
    assert!(!w.is_busy());
    assert!(w.take_focus_request());
    assert!(!w.take_focus_request());

    // from Loading, too
    let mut w = filled("1", "A");
    w.submit().unwrap();
    w.clear();
    assert!(!w.is_busy());
}

#[test]
fn result_arriving_after_clear_is_dropped() {
    let mut w = filled("1", "A");
    let old = w.submit().unwrap();
    w.clear();
    assert!(!w.finish(old.ticket, Ok(Outcome::Found(details()))));
    assert_eq!(w.view(), View::Empty);

    // ...and cannot overwrite a newer query either
    w.cert_input = "2".into();
    w.last_input = "B".into();
    let new = w.submit().unwrap();
    assert!(!w.finish(old.ticket, Ok(Outcome::Found(details()))));
    assert!(w.is_busy());
    assert!(w.finish(new.ticket, Ok(Outcome::NotFound(Miss::UnknownNumber))));
    assert_eq!(w.view(), View::NotFound);
}

#[test]
fn widget_is_usable_again_after_error() {
    let mut w = filled("1", "A");
    let sub = w.submit().unwrap();
    w.finish(sub.ticket, Err(LookupError::Unexpected("down".into())));
    assert!(w.submit().is_some());
}
