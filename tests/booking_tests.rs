// Host-side tests for the booking form: validation, steps and pricing.

use venue_cube::core::booking::*;

fn filled_details() -> BookingForm {
    let mut f = BookingForm::new();
    for (field, value) in [
        (BookingField::Date, "2026-06-01"),
        (BookingField::Time, "18:00"),
        (BookingField::Guests, "120"),
        (BookingField::Name, "Ada Lovelace"),
        (BookingField::Email, "ada@example.com"),
        (BookingField::Phone, "555-0100"),
    ] {
        f.set_field(field, value);
    }
    f
}

#[test]
fn details_require_every_mandatory_field() {
    let mut f = BookingForm::new();
    assert_eq!(f.submit(), Err(BookingError::Missing(BookingField::Date)));
    f.set_field(BookingField::Date, "2026-06-01");
    assert_eq!(f.submit(), Err(BookingError::Missing(BookingField::Time)));
    f.set_field(BookingField::Time, "18:00");
    assert_eq!(f.submit(), Err(BookingError::Missing(BookingField::Guests)));
    assert_eq!(f.step(), BookingStep::Details);

    // special requests stay optional
    let mut f = filled_details();
    assert_eq!(f.submit(), Ok(BookingStep::Payment));
}

#[test]
fn whitespace_only_counts_as_missing() {
    let mut f = filled_details();
    f.set_field(BookingField::Name, "   ");
    assert_eq!(f.submit(), Err(BookingError::Missing(BookingField::Name)));
}

#[test]
fn guest_count_must_be_in_range() {
    for bad in ["0", "201", "-3", "lots", "1.5"] {
        let mut f = filled_details();
        f.set_field(BookingField::Guests, bad);
        assert_eq!(f.submit(), Err(BookingError::GuestCount), "guests={bad}");
    }
    for good in ["1", "200", " 42 "] {
        let mut f = filled_details();
        f.set_field(BookingField::Guests, good);
        assert_eq!(f.submit(), Ok(BookingStep::Payment), "guests={good}");
    }
}

#[test]
fn email_needs_a_local_part_and_domain() {
    for bad in ["ada", "@example.com", "ada@", "a@b@c"] {
        let mut f = filled_details();
        f.set_field(BookingField::Email, bad);
        assert_eq!(f.submit(), Err(BookingError::Email), "email={bad}");
    }
}

#[test]
fn payment_requires_card_fields_then_confirms() {
    let mut f = filled_details();
    f.submit().unwrap();
    assert_eq!(f.submit(), Err(BookingError::Missing(BookingField::CardNumber)));
    f.set_field(BookingField::CardNumber, "4242 4242 4242 4242");
    f.set_field(BookingField::Expiry, "12/29");
    assert_eq!(f.submit(), Err(BookingError::Missing(BookingField::Cvv)));
    f.set_field(BookingField::Cvv, "123");
    assert_eq!(f.submit(), Ok(BookingStep::Confirmation));
    assert_eq!(f.submit(), Err(BookingError::AlreadyConfirmed));
}

#[test]
fn card_fields_are_truncated() {
    let mut f = BookingForm::new();
    f.set_field(BookingField::CardNumber, "4242 4242 4242 4242 9999");
    f.set_field(BookingField::Expiry, "12/2029");
    f.set_field(BookingField::Cvv, "12345");
    f.set_field(BookingField::SpecialRequests, "a very long note that is kept as typed");
    let d = f.draft();
    assert_eq!(d.card_number, "4242 4242 4242 4242");
    assert_eq!(d.expiry, "12/20");
    assert_eq!(d.cvv, "1234");
    assert_eq!(d.special_requests, "a very long note that is kept as typed");
}

#[test]
fn back_only_leaves_payment() {
    let mut f = BookingForm::new();
    assert!(!f.back());
    let mut f = filled_details();
    f.submit().unwrap();
    assert!(f.back());
    assert_eq!(f.step(), BookingStep::Details);
    // the draft survives going back
    assert_eq!(f.draft().name, "Ada Lovelace");
}

#[test]
fn quote_follows_duration() {
    let f = BookingForm::new();
    let q = f.quote();
    assert_eq!(q.hours, 4);
    assert_eq!(q.total, 1400);
    assert_eq!(q.deposit, 700.0);

    for (hours, total, deposit) in [("6", 2100, 1050.0), ("8", 2800, 1400.0)] {
        let mut f = BookingForm::new();
        f.set_field(BookingField::Duration, hours);
        assert_eq!(f.quote().total, total);
        assert_eq!(f.quote().deposit, deposit);
    }

    let mut f = BookingForm::new();
    f.set_field(BookingField::Duration, "10");
    assert_eq!(f.quote().total, 3500);
    assert_eq!(f.draft().get(BookingField::Duration), "10");
    f.set_field(BookingField::Duration, "7");
    assert_eq!(f.draft().duration, DurationHours::Four);
}

#[test]
fn reset_discards_the_draft() {
    let mut f = filled_details();
    f.submit().unwrap();
    f.reset();
    assert_eq!(f.step(), BookingStep::Details);
    assert_eq!(f.draft(), &BookingDraft::default());
}

#[test]
fn field_names_match_form_controls() {
    assert_eq!(BookingField::from_name("cardNumber"), Some(BookingField::CardNumber));
    assert_eq!(BookingField::from_name("specialRequests"), Some(BookingField::SpecialRequests));
    assert_eq!(BookingField::from_name("card_number"), None);
    assert_eq!(
        BookingError::Missing(BookingField::Email).to_string(),
        "Email is required"
    );
}

#[test]
fn usd_formatting() {
    assert_eq!(format_usd(0.0), "$0");
    assert_eq!(format_usd(350.0), "$350");
    assert_eq!(format_usd(1400.0), "$1,400");
    assert_eq!(format_usd(2500.0), "$2,500");
    assert_eq!(format_usd(1234567.0), "$1,234,567");
    assert_eq!(format_usd(700.5), "$700.50");
}
