// Host-side tests for the generated overlay and modal HTML.

use venue_cube::core::booking::{BookingField, BookingForm};
use venue_cube::core::constants::OVERLAY_ATTR;
use venue_cube::core::markup::*;
use venue_cube::core::venue::{Corner, ResolvedConfig, Venue};

fn venue(corner: Corner) -> Venue {
    ResolvedConfig::default().venue_at(corner).clone()
}

fn payment_form() -> BookingForm {
    let mut f = BookingForm::new();
    for (field, value) in [
        (BookingField::Date, "2026-06-01"),
        (BookingField::Time, "18:00"),
        (BookingField::Guests, "40"),
        (BookingField::Name, "Ada"),
        (BookingField::Email, "ada@example.com"),
        (BookingField::Phone, "555"),
    ] {
        f.set_field(field, value);
    }
    f.submit().unwrap();
    f
}

#[test]
fn escapes_html_metacharacters() {
    assert_eq!(
        escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn shell_contains_surface_and_roots() {
    let cfg = ResolvedConfig::default();
    let html = widget_shell(&cfg);
    assert!(html.contains(SURFACE_ATTR));
    assert!(html.contains(OVERLAY_ROOT_ATTR));
    assert!(html.contains(MODAL_ROOT_ATTR));
    assert!(html.contains("<canvas"));
    assert!(html.contains(&cfg.headline));
    for v in &cfg.venues {
        assert!(html.contains(&escape_html(&v.name)));
    }
}

#[test]
fn overlay_card_is_accessible_and_routable() {
    let v = venue(Corner::BottomLeft);
    let html = overlay_card(&v, "Learn More", "Book Now");
    assert!(html.contains(OVERLAY_ATTR));
    assert!(html.contains("role=\"region\""));
    assert!(html.contains("aria-live=\"polite\""));
    assert!(html.contains("aria-label=\"Venue information: The Garden Terrace\""));
    assert!(html.contains(&format!("data-action=\"{ACTION_LEARN_MORE}\" data-corner=\"bottom-left\"")));
    assert!(html.contains(&format!("data-action=\"{ACTION_BOOK_NOW}\" data-corner=\"bottom-left\"")));
    assert!(html.contains(&v.color));
}

#[test]
fn host_supplied_text_is_escaped() {
    let mut v = venue(Corner::TopLeft);
    v.name = "<script>alert(1)</script>".to_string();
    let html = overlay_card(&v, "<i>more</i>", "Book");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<i>more</i>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn info_modal_lists_pricing_and_actions() {
    let html = info_modal(&venue(Corner::TopRight));
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("aria-modal=\"true\""));
    assert!(html.contains(BACKDROP_ATTR));
    assert!(html.contains("$2,500"));
    assert!(html.contains("$350/hr"));
    assert!(html.contains("4 hour minimum"));
    assert!(html.contains("Our executive center offers"));
    assert!(html.contains(&format!("data-action=\"{ACTION_BOOK_FROM_INFO}\"")));
    assert!(html.contains(&format!("data-action=\"{ACTION_CLOSE}\"")));
}

#[test]
fn booking_details_step_has_all_inputs_and_total() {
    let html = booking_modal(&venue(Corner::TopLeft), &BookingForm::new(), None);
    assert!(html.contains("Book The Grand Ballroom"));
    for name in ["date", "time", "duration", "guests", "name", "email", "phone", "specialRequests"] {
        assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
    }
    assert!(!html.contains("name=\"cardNumber\""));
    assert!(html.contains(TOTAL_ATTR));
    assert!(html.contains("$1,400"));
    assert!(html.contains("min=\"1\" max=\"200\""));
    assert!(html.contains("Continue to Payment"));
    assert!(!html.contains(&format!("data-action=\"{ACTION_BACK}\"")));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn booking_payment_step_shows_deposit_and_back() {
    let html = booking_modal(&venue(Corner::TopLeft), &payment_form(), None);
    for name in ["cardNumber", "expiry", "cvv"] {
        assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
    }
    assert!(html.contains("maxlength=\"19\""));
    assert!(html.contains("$700"));
    assert!(html.contains("Complete Booking"));
    assert!(html.contains(&format!("data-action=\"{ACTION_BACK}\"")));
}

#[test]
fn booking_errors_render_as_alerts() {
    let html = booking_modal(&venue(Corner::TopLeft), &BookingForm::new(), Some("Email is required"));
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Email is required"));
}

#[test]
fn booking_confirmation_summarizes() {
    let mut f = payment_form();
    f.set_field(BookingField::CardNumber, "4242");
    f.set_field(BookingField::Expiry, "01/30");
    f.set_field(BookingField::Cvv, "123");
    f.submit().unwrap();
    let html = booking_modal(&venue(Corner::TopLeft), &f, None);
    assert!(html.contains("Booking Confirmed!"));
    assert!(html.contains("ada@example.com"));
    assert!(html.contains("The Grand Ballroom"));
    assert!(!html.contains("<input"));
}
