//! HTML for the overlay card and the two modals.
//!
//! Interactive elements carry `data-action` (and `data-corner` where a venue
//! is involved) so the DOM layer can route clicks with one delegated listener.

use super::booking::{format_usd, BookingField, BookingForm, BookingStep, DurationHours};
use super::constants::{HOURLY_RATE, MAX_GUESTS, MIN_GUESTS, OVERLAY_ATTR, STARTING_PRICE};
use super::venue::{ResolvedConfig, Venue};
use std::fmt::Write;

pub const ACTION_LEARN_MORE: &str = "learn-more";
pub const ACTION_BOOK_NOW: &str = "book-now";
pub const ACTION_BOOK_FROM_INFO: &str = "book-from-info";
pub const ACTION_CLOSE: &str = "close";
pub const ACTION_BACK: &str = "back";

pub const BACKDROP_ATTR: &str = "data-modal-backdrop";
pub const TOTAL_ATTR: &str = "data-booking-total";
pub const SURFACE_ATTR: &str = "data-venue-surface";
pub const OVERLAY_ROOT_ATTR: &str = "data-venue-overlay-root";
pub const MODAL_ROOT_ATTR: &str = "data-venue-modal-root";

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn heading(config: &ResolvedConfig) -> String {
    format!(
        "<header class=\"vc-heading\"><h1>{}</h1><p>{}</p></header>",
        escape_html(&config.headline),
        escape_html(&config.subheadline)
    )
}

/// Static skeleton the widget mounts into: heading, render surface and the
/// two roots the overlay and modal are rendered into.
pub fn widget_shell(config: &ResolvedConfig) -> String {
    format!(
        concat!(
            "{heading}",
            "<div class=\"vc-surface\">",
            "<canvas {surface} role=\"img\" aria-label=\"Interactive venue grid: {names}\"></canvas>",
            "</div>",
            "<div class=\"vc-overlay-root hidden\" {overlay}></div>",
            "<div class=\"vc-modal-root\" {modal}></div>"
        ),
        heading = heading(config),
        surface = SURFACE_ATTR,
        names = escape_html(
            &config
                .venues
                .iter()
                .map(|v| v.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        overlay = OVERLAY_ROOT_ATTR,
        modal = MODAL_ROOT_ATTR,
    )
}

/// Floating venue card shown while a venue is active.
pub fn overlay_card(venue: &Venue, primary_label: &str, secondary_label: &str) -> String {
    let name = escape_html(&venue.name);
    let corner = venue.position.as_str();
    let color = escape_html(&venue.color);
    format!(
        concat!(
            "<div class=\"vc-overlay\" role=\"region\" aria-live=\"polite\" aria-label=\"Venue information: {name}\">",
            "<div class=\"vc-card\" {attr} style=\"box-shadow: inset 0 0 0 2px {color}40\">",
            "<div class=\"vc-card-image\"><img src=\"{img}\" alt=\"{name} venue space\" loading=\"lazy\"></div>",
            "<div class=\"vc-card-body\">",
            "<div class=\"vc-accent\" style=\"background-color: {color}\" aria-hidden=\"true\"></div>",
            "<h2>{name}</h2><p>{desc}</p>",
            "<div class=\"vc-actions\">",
            "<button type=\"button\" class=\"vc-btn vc-btn-primary\" data-action=\"{learn}\" data-corner=\"{corner}\" aria-label=\"Learn more about {name}\">{primary}</button>",
            "<button type=\"button\" class=\"vc-btn vc-btn-secondary\" data-action=\"{book}\" data-corner=\"{corner}\" aria-label=\"Book {name}\">{secondary}</button>",
            "</div></div></div>",
            "<div class=\"vc-arrow\" aria-hidden=\"true\"></div>",
            "</div>"
        ),
        name = name,
        attr = OVERLAY_ATTR,
        color = color,
        img = escape_html(&venue.image_url),
        desc = escape_html(&venue.description),
        learn = ACTION_LEARN_MORE,
        book = ACTION_BOOK_NOW,
        corner = corner,
        primary = escape_html(primary_label),
        secondary = escape_html(secondary_label),
    )
}

fn modal_shell(label: &str, body: &str) -> String {
    format!(
        concat!(
            "<div class=\"vc-backdrop\" {backdrop}>",
            "<div class=\"vc-modal\" role=\"dialog\" aria-modal=\"true\" aria-label=\"{label}\">",
            "<button type=\"button\" class=\"vc-close\" data-action=\"{close}\" aria-label=\"Close\">&times;</button>",
            "{body}",
            "</div></div>"
        ),
        backdrop = BACKDROP_ATTR,
        label = escape_html(label),
        close = ACTION_CLOSE,
        body = body,
    )
}

pub fn info_modal(venue: &Venue) -> String {
    let name = escape_html(&venue.name);
    let mut body = String::new();
    let _ = write!(
        body,
        concat!(
            "<div class=\"vc-hero\"><img src=\"{img}\" alt=\"{name}\">",
            "<div class=\"vc-hero-text\"><h2>{name}</h2><p>{desc}</p></div></div>",
            "<div class=\"vc-modal-body\">",
            "<h3>Features &amp; Amenities</h3><ul class=\"vc-features\">",
            "<li>Capacity: 50-200 guests</li><li>Premium AV System</li>",
            "<li>Catering Available</li><li>Flexible Layout</li></ul>",
            "<h3>Space Details</h3><p>Our {lower} offers a stunning environment perfect for your special occasion. ",
            "With state-of-the-art facilities, customizable layouts, and dedicated event support, ",
            "we ensure your event is memorable and seamless from start to finish.</p>",
            "<div class=\"vc-pricing\">",
            "<div><small>Starting from</small><strong>{start}</strong><small>per event</small></div>",
            "<div><small>Hourly rate</small><strong>{rate}/hr</strong><small>4 hour minimum</small></div>",
            "</div>",
            "<div class=\"vc-actions\">",
            "<button type=\"button\" class=\"vc-btn vc-btn-primary\" data-action=\"{book}\">Book Now</button>",
            "<button type=\"button\" class=\"vc-btn vc-btn-secondary\" data-action=\"{close}\">Close</button>",
            "</div></div>"
        ),
        img = escape_html(&venue.image_url),
        name = name,
        desc = escape_html(&venue.description),
        lower = escape_html(&venue.name.to_lowercase()),
        start = format_usd(STARTING_PRICE as f64),
        rate = format_usd(HOURLY_RATE as f64),
        book = ACTION_BOOK_FROM_INFO,
        close = ACTION_CLOSE,
    );
    modal_shell(&venue.name, &body)
}

pub fn booking_modal(venue: &Venue, form: &BookingForm, error: Option<&str>) -> String {
    let step = form.step();
    let draft = form.draft();
    let quote = form.quote();
    let mut body = String::new();

    let (title, subtitle) = match step {
        BookingStep::Details => (format!("Book {}", venue.name), "Enter your event details"),
        BookingStep::Payment => (format!("Book {}", venue.name), "Complete your payment"),
        BookingStep::Confirmation => ("Booking Confirmed!".to_string(), "Your reservation is confirmed"),
    };
    let _ = write!(
        body,
        "<div class=\"vc-booking-header\"><h2>{}</h2><p>{}</p></div>",
        escape_html(&title),
        subtitle
    );

    if step != BookingStep::Confirmation {
        let first = if step == BookingStep::Payment { "&#10003;" } else { "1" };
        let _ = write!(
            body,
            concat!(
                "<div class=\"vc-progress\" aria-label=\"Step {n} of 2\">",
                "<span class=\"vc-dot {a}\">{first}</span><span class=\"vc-bar\"></span>",
                "<span class=\"vc-dot {b}\">2</span></div>"
            ),
            n = if step == BookingStep::Details { 1 } else { 2 },
            a = if step == BookingStep::Details { "current" } else { "done" },
            b = if step == BookingStep::Payment { "current" } else { "" },
            first = first,
        );
    }

    if let Some(msg) = error {
        let _ = write!(
            body,
            "<p class=\"vc-error\" role=\"alert\">{}</p>",
            escape_html(msg)
        );
    }

    body.push_str("<form class=\"vc-form\" novalidate>");
    match step {
        BookingStep::Details => {
            body.push_str(&input(BookingField::Date, "date", &draft.date, ""));
            body.push_str(&input(BookingField::Time, "time", &draft.time, ""));
            body.push_str(&duration_select(draft.duration));
            body.push_str(&format!(
                concat!(
                    "<label>{label}<input name=\"{name}\" type=\"number\" min=\"{min}\" max=\"{max}\" ",
                    "placeholder=\"50\" value=\"{value}\" required></label>"
                ),
                label = BookingField::Guests.label(),
                name = BookingField::Guests.name(),
                min = MIN_GUESTS,
                max = MAX_GUESTS,
                value = escape_html(&draft.guests),
            ));
            body.push_str(&input(BookingField::Name, "text", &draft.name, "John Doe"));
            body.push_str(&input(BookingField::Email, "email", &draft.email, "john@example.com"));
            body.push_str(&input(BookingField::Phone, "tel", &draft.phone, "(555) 123-4567"));
            let _ = write!(
                body,
                concat!(
                    "<label>{label} (Optional)<textarea name=\"{name}\" rows=\"3\" ",
                    "placeholder=\"Any special requirements or requests...\">{value}</textarea></label>"
                ),
                label = BookingField::SpecialRequests.label(),
                name = BookingField::SpecialRequests.name(),
                value = escape_html(&draft.special_requests),
            );
            let _ = write!(
                body,
                concat!(
                    "<div class=\"vc-summary\"><span>Estimated Total:</span>",
                    "<strong {attr}>{total}</strong>",
                    "<small>*Final price may vary based on additional services</small></div>"
                ),
                attr = TOTAL_ATTR,
                total = format_usd(quote.total as f64),
            );
        }
        BookingStep::Payment => {
            let _ = write!(
                body,
                "<p class=\"vc-note\"><strong>Booking Summary:</strong> {} hours on {} for {} guests</p>",
                quote.hours,
                escape_html(&draft.date),
                escape_html(&draft.guests)
            );
            body.push_str(&input(
                BookingField::CardNumber,
                "text",
                &draft.card_number,
                "1234 5678 9012 3456",
            ));
            body.push_str(&input(BookingField::Expiry, "text", &draft.expiry, "MM/YY"));
            body.push_str(&input(BookingField::Cvv, "text", &draft.cvv, "123"));
            let _ = write!(
                body,
                concat!(
                    "<div class=\"vc-summary\">",
                    "<div><span>Subtotal:</span><strong>{total}</strong></div>",
                    "<div><span>Deposit (50%):</span><strong>{deposit}</strong></div>",
                    "<div class=\"vc-due\"><span>Due Today:</span><strong>{deposit}</strong></div>",
                    "</div><p class=\"vc-fineprint\">Payment is simulated; no card is charged.</p>"
                ),
                total = format_usd(quote.total as f64),
                deposit = format_usd(quote.deposit),
            );
        }
        BookingStep::Confirmation => {
            let _ = write!(
                body,
                concat!(
                    "<div class=\"vc-confirmation\"><div class=\"vc-check\" aria-hidden=\"true\">&#10003;</div>",
                    "<p>A confirmation email has been sent to {email}</p>",
                    "<dl><dt>Venue</dt><dd>{venue}</dd><dt>Date</dt><dd>{date}</dd>",
                    "<dt>Time</dt><dd>{time}</dd><dt>Duration</dt><dd>{hours} hours</dd>",
                    "<dt>Guests</dt><dd>{guests}</dd></dl></div>"
                ),
                email = escape_html(&draft.email),
                venue = escape_html(&venue.name),
                date = escape_html(&draft.date),
                time = escape_html(&draft.time),
                hours = quote.hours,
                guests = escape_html(&draft.guests),
            );
        }
    }

    if step != BookingStep::Confirmation {
        body.push_str("<div class=\"vc-actions\">");
        if step == BookingStep::Payment {
            let _ = write!(
                body,
                "<button type=\"button\" class=\"vc-btn vc-btn-secondary\" data-action=\"{}\">Back</button>",
                ACTION_BACK
            );
        }
        let _ = write!(
            body,
            "<button type=\"submit\" class=\"vc-btn vc-btn-primary\">{}</button>",
            if step == BookingStep::Details {
                "Continue to Payment"
            } else {
                "Complete Booking"
            }
        );
        body.push_str("</div>");
    }
    body.push_str("</form>");

    modal_shell(&format!("Book {}", venue.name), &body)
}

fn input(field: BookingField, kind: &str, value: &str, placeholder: &str) -> String {
    let maxlength = match field {
        BookingField::CardNumber => " maxlength=\"19\"",
        BookingField::Expiry => " maxlength=\"5\"",
        BookingField::Cvv => " maxlength=\"4\"",
        _ => "",
    };
    format!(
        "<label>{label}<input name=\"{name}\" type=\"{kind}\" value=\"{value}\" placeholder=\"{ph}\"{maxlength} required></label>",
        label = field.label(),
        name = field.name(),
        kind = kind,
        value = escape_html(value),
        ph = escape_html(placeholder),
        maxlength = maxlength,
    )
}

fn duration_select(selected: DurationHours) -> String {
    let mut out = format!(
        "<label>{} (hours)<select name=\"{}\" required>",
        BookingField::Duration.label(),
        BookingField::Duration.name()
    );
    for d in DurationHours::ALL {
        let _ = write!(
            out,
            "<option value=\"{h}\"{sel}>{h} hours</option>",
            h = d.hours(),
            sel = if d == selected { " selected" } else { "" }
        );
    }
    out.push_str("</select></label>");
    out
}

pub const STYLE_SHEET: &str = r#"
.vc-root{position:relative;display:flex;flex-direction:column;align-items:center;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;color:#171717}
.vc-heading{text-align:center;margin-bottom:12px}
.vc-heading h1{font-size:1.6rem;margin:0 0 4px}
.vc-heading p{margin:0;color:#525252}
.vc-surface{width:min(100%,480px);aspect-ratio:1/1;position:relative}
.vc-surface canvas{width:100%;height:100%;display:block;touch-action:manipulation}
.vc-overlay-root.hidden{display:none}
.vc-overlay{position:fixed;left:0;right:0;bottom:96px;display:flex;justify-content:center;padding:0 16px;z-index:20;pointer-events:none;animation:vc-rise .4s cubic-bezier(.4,0,.2,1)}
.vc-card{position:relative;display:flex;max-width:42rem;width:100%;background:#fff;border-radius:16px;box-shadow:0 25px 50px -12px rgba(0,0,0,.25);overflow:hidden;pointer-events:auto}
.vc-card-image{width:40%;min-height:12rem}
.vc-card-image img{width:100%;height:100%;object-fit:cover}
.vc-card-body{flex:1;padding:24px 32px;display:flex;flex-direction:column;justify-content:center}
.vc-accent{width:48px;height:4px;border-radius:9999px;margin-bottom:16px}
.vc-arrow{position:absolute;top:-12px;left:50%;width:24px;height:24px;background:#fff;transform:translateX(-50%) rotate(45deg)}
.vc-actions{display:flex;gap:12px;margin-top:16px}
.vc-btn{padding:8px 24px;border-radius:8px;font-weight:600;cursor:pointer}
.vc-btn-primary{background:#171717;color:#fff;border:none}
.vc-btn-secondary{background:#fff;color:#404040;border:2px solid #d4d4d4}
.vc-backdrop{position:fixed;inset:0;z-index:50;display:flex;align-items:center;justify-content:center;padding:16px;background:rgba(0,0,0,.7);overflow-y:auto}
.vc-modal{position:relative;width:100%;max-width:42rem;max-height:90vh;overflow-y:auto;background:#fff;border-radius:16px}
.vc-close{position:absolute;top:16px;right:16px;border:none;background:#fff;border-radius:9999px;width:36px;height:36px;font-size:20px;cursor:pointer;z-index:1}
.vc-hero{position:relative;height:14rem;overflow:hidden}
.vc-hero img{width:100%;height:100%;object-fit:cover}
.vc-hero-text{position:absolute;left:24px;right:24px;bottom:24px;color:#fff}
.vc-modal-body,.vc-form{padding:24px}
.vc-form label{display:block;margin-bottom:12px;font-size:.875rem;font-weight:500}
.vc-form input,.vc-form select,.vc-form textarea{display:block;width:100%;margin-top:6px;padding:8px 12px;border:1px solid #d1d5db;border-radius:8px;box-sizing:border-box}
.vc-booking-header{background:linear-gradient(90deg,#111827,#1f2937);color:#fff;padding:24px 32px}
.vc-progress{display:flex;align-items:center;justify-content:center;gap:8px;padding:16px;background:#f9fafb}
.vc-dot{width:32px;height:32px;border-radius:9999px;display:flex;align-items:center;justify-content:center;background:#d1d5db}
.vc-dot.current{background:#000;color:#fff}
.vc-dot.done{background:#22c55e;color:#fff}
.vc-bar{width:64px;height:4px;background:#d1d5db}
.vc-error{margin:16px 24px 0;color:#b91c1c}
.vc-summary{background:#f9fafb;border-radius:8px;padding:16px;margin-top:16px}
.vc-pricing{display:flex;justify-content:space-between;background:#f9fafb;border-radius:8px;padding:16px}
.vc-pricing div{display:flex;flex-direction:column}
@keyframes vc-rise{from{opacity:0;transform:translateY(20px)}to{opacity:1;transform:none}}
"#;
