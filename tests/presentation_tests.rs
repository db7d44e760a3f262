// Host-side tests for overlay visibility and the modal state machine.

use venue_cube::core::booking::{BookingField, BookingStep};
use venue_cube::core::constants::CONFIRMATION_AUTO_CLOSE_MS;
use venue_cube::core::presentation::*;
use venue_cube::core::venue::Corner;

fn fill_and_confirm(p: &mut Presentation) -> Outcome {
    for (field, value) in [
        (BookingField::Date, "2026-06-01"),
        (BookingField::Time, "18:00"),
        (BookingField::Guests, "80"),
        (BookingField::Name, "Grace Hopper"),
        (BookingField::Email, "grace@example.com"),
        (BookingField::Phone, "555-0101"),
    ] {
        p.set_field(field, value);
    }
    assert!(p.dispatch(UiAction::Submit).changed);
    for (field, value) in [
        (BookingField::CardNumber, "4242424242424242"),
        (BookingField::Expiry, "01/30"),
        (BookingField::Cvv, "999"),
    ] {
        p.set_field(field, value);
    }
    p.dispatch(UiAction::Submit)
}

#[test]
fn learn_more_then_book_from_info() {
    let mut p = Presentation::new();
    assert!(p.dispatch(UiAction::LearnMore(Corner::TopRight)).changed);
    assert_eq!(p.modal(), ModalState::Info(Corner::TopRight));
    assert!(p.dispatch(UiAction::BookFromInfo).changed);
    assert_eq!(p.modal(), ModalState::Booking(Corner::TopRight));
    assert_eq!(p.booking().step(), BookingStep::Details);
}

#[test]
fn book_now_opens_booking_directly() {
    let mut p = Presentation::new();
    p.dispatch(UiAction::BookNow(Corner::BottomLeft));
    assert_eq!(p.modal(), ModalState::Booking(Corner::BottomLeft));
    assert_eq!(p.modal().venue(), Some(Corner::BottomLeft));
}

#[test]
fn invalid_transitions_are_ignored() {
    let mut p = Presentation::new();
    assert!(!p.dispatch(UiAction::BookFromInfo).changed);
    assert!(!p.dispatch(UiAction::Submit).changed);
    assert!(!p.dispatch(UiAction::Close).changed);
    assert!(!p.dispatch(UiAction::Back).changed);
    p.dispatch(UiAction::BookNow(Corner::TopLeft));
    // learn more cannot replace an open booking
    assert!(!p.dispatch(UiAction::LearnMore(Corner::TopRight)).changed);
    assert_eq!(p.modal(), ModalState::Booking(Corner::TopLeft));
}

#[test]
fn open_modal_suppresses_the_overlay() {
    let mut p = Presentation::new();
    assert_eq!(p.overlay_venue(Some(Corner::TopLeft)), Some(Corner::TopLeft));
    p.dispatch(UiAction::LearnMore(Corner::TopLeft));
    assert_eq!(p.overlay_venue(Some(Corner::TopLeft)), None);
    p.dispatch(UiAction::Close);
    assert_eq!(p.modal(), ModalState::Closed);
    assert_eq!(p.overlay_venue(Some(Corner::TopLeft)), Some(Corner::TopLeft));
}

#[test]
fn fields_are_ignored_outside_booking() {
    let mut p = Presentation::new();
    p.set_field(BookingField::Name, "Nobody");
    p.dispatch(UiAction::LearnMore(Corner::TopLeft));
    p.set_field(BookingField::Name, "Nobody");
    assert_eq!(p.booking().draft().name, "");
}

#[test]
fn rejected_submit_records_an_error_until_fixed() {
    let mut p = Presentation::new();
    p.dispatch(UiAction::BookNow(Corner::TopLeft));
    assert!(p.dispatch(UiAction::Submit).changed);
    assert!(p.last_error().is_some());
    assert_eq!(p.booking().step(), BookingStep::Details);
    let outcome = fill_and_confirm(&mut p);
    assert!(p.last_error().is_none());
    assert_eq!(p.booking().step(), BookingStep::Confirmation);
    assert!(matches!(outcome.effect, Effect::ArmAutoClose { .. }));
}

#[test]
fn back_from_payment_keeps_the_modal_open() {
    let mut p = Presentation::new();
    p.dispatch(UiAction::BookNow(Corner::TopLeft));
    p.set_field(BookingField::Date, "2026-06-01");
    p.set_field(BookingField::Time, "10:00");
    p.set_field(BookingField::Guests, "5");
    p.set_field(BookingField::Name, "X");
    p.set_field(BookingField::Email, "x@y.z");
    p.set_field(BookingField::Phone, "1");
    p.dispatch(UiAction::Submit);
    assert_eq!(p.booking().step(), BookingStep::Payment);
    assert!(p.dispatch(UiAction::Back).changed);
    assert_eq!(p.booking().step(), BookingStep::Details);
    assert!(!p.dispatch(UiAction::Back).changed);
    assert_eq!(p.modal(), ModalState::Booking(Corner::TopLeft));
}

#[test]
fn confirmation_arms_auto_close_with_current_generation() {
    let mut p = Presentation::new();
    p.dispatch(UiAction::BookNow(Corner::BottomRight));
    let outcome = fill_and_confirm(&mut p);
    let Effect::ArmAutoClose { delay_ms, generation } = outcome.effect else {
        panic!("expected auto-close, got {:?}", outcome.effect);
    };
    assert_eq!(delay_ms, CONFIRMATION_AUTO_CLOSE_MS);
    assert_eq!(generation, p.generation());

    let done = p.dispatch(UiAction::AutoCloseElapsed(generation));
    assert!(done.changed);
    assert_eq!(done.effect, Effect::None);
    assert_eq!(p.modal(), ModalState::Closed);
    assert_eq!(p.booking().step(), BookingStep::Details);
}

#[test]
fn manual_close_cancels_auto_close_and_stale_timers_do_nothing() {
    let mut p = Presentation::new();
    p.dispatch(UiAction::BookNow(Corner::TopLeft));
    let Effect::ArmAutoClose { generation, .. } = fill_and_confirm(&mut p).effect else {
        panic!("expected auto-close");
    };
    let closed = p.dispatch(UiAction::Close);
    assert_eq!(closed.effect, Effect::CancelAutoClose);

    // a new booking must not be closed by the old timer
    p.dispatch(UiAction::BookNow(Corner::TopLeft));
    assert!(!p.dispatch(UiAction::AutoCloseElapsed(generation)).changed);
    assert_eq!(p.modal(), ModalState::Booking(Corner::TopLeft));
}

#[test]
fn closing_without_a_timer_has_no_effect() {
    let mut p = Presentation::new();
    p.dispatch(UiAction::LearnMore(Corner::TopLeft));
    let closed = p.dispatch(UiAction::Close);
    assert!(closed.changed);
    assert_eq!(closed.effect, Effect::None);
}
