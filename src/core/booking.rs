//! The booking form: a draft plus a forward-only step machine.
//!
//! `details → payment → confirmation`, with `payment → details` as the only
//! way back. Payment is simulated; reaching confirmation is the whole effect.

use super::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingStep {
    #[default]
    Details,
    Payment,
    Confirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationHours {
    #[default]
    Four,
    Six,
    Eight,
    Ten,
}

impl DurationHours {
    pub const ALL: [DurationHours; 4] = [
        DurationHours::Four,
        DurationHours::Six,
        DurationHours::Eight,
        DurationHours::Ten,
    ];

    pub fn hours(self) -> u32 {
        match self {
            DurationHours::Four => 4,
            DurationHours::Six => 6,
            DurationHours::Eight => 8,
            DurationHours::Ten => 10,
        }
    }

    pub fn from_hours(hours: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.hours() == hours)
    }

    /// Parse a `<select>` value; anything unexpected falls back to four hours.
    pub fn parse(value: &str) -> Self {
        value
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::from_hours)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Date,
    Time,
    Duration,
    Guests,
    Name,
    Email,
    Phone,
    CardNumber,
    Expiry,
    Cvv,
    SpecialRequests,
}

impl BookingField {
    /// Form control `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            BookingField::Date => "date",
            BookingField::Time => "time",
            BookingField::Duration => "duration",
            BookingField::Guests => "guests",
            BookingField::Name => "name",
            BookingField::Email => "email",
            BookingField::Phone => "phone",
            BookingField::CardNumber => "cardNumber",
            BookingField::Expiry => "expiry",
            BookingField::Cvv => "cvv",
            BookingField::SpecialRequests => "specialRequests",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        use BookingField::*;
        [
            Date,
            Time,
            Duration,
            Guests,
            Name,
            Email,
            Phone,
            CardNumber,
            Expiry,
            Cvv,
            SpecialRequests,
        ]
        .into_iter()
        .find(|f| f.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingField::Date => "Event date",
            BookingField::Time => "Start time",
            BookingField::Duration => "Duration",
            BookingField::Guests => "Number of guests",
            BookingField::Name => "Full name",
            BookingField::Email => "Email",
            BookingField::Phone => "Phone",
            BookingField::CardNumber => "Card number",
            BookingField::Expiry => "Expiry date",
            BookingField::Cvv => "CVV",
            BookingField::SpecialRequests => "Special requests",
        }
    }

    fn max_len(self) -> Option<usize> {
        match self {
            BookingField::CardNumber => Some(CARD_NUMBER_MAX_LEN),
            BookingField::Expiry => Some(EXPIRY_MAX_LEN),
            BookingField::Cvv => Some(CVV_MAX_LEN),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("{} is required", .0.label())]
    Missing(BookingField),
    #[error("number of guests must be between {} and {}", MIN_GUESTS, MAX_GUESTS)]
    GuestCount,
    #[error("email address looks invalid")]
    Email,
    #[error("booking is already confirmed")]
    AlreadyConfirmed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub date: String,
    pub time: String,
    pub duration: DurationHours,
    pub guests: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub special_requests: String,
}

impl BookingDraft {
    pub fn get(&self, field: BookingField) -> String {
        match field {
            BookingField::Date => self.date.clone(),
            BookingField::Time => self.time.clone(),
            BookingField::Duration => self.duration.hours().to_string(),
            BookingField::Guests => self.guests.clone(),
            BookingField::Name => self.name.clone(),
            BookingField::Email => self.email.clone(),
            BookingField::Phone => self.phone.clone(),
            BookingField::CardNumber => self.card_number.clone(),
            BookingField::Expiry => self.expiry.clone(),
            BookingField::Cvv => self.cvv.clone(),
            BookingField::SpecialRequests => self.special_requests.clone(),
        }
    }

    fn slot(&mut self, field: BookingField) -> Option<&mut String> {
        match field {
            BookingField::Date => Some(&mut self.date),
            BookingField::Time => Some(&mut self.time),
            BookingField::Duration => None,
            BookingField::Guests => Some(&mut self.guests),
            BookingField::Name => Some(&mut self.name),
            BookingField::Email => Some(&mut self.email),
            BookingField::Phone => Some(&mut self.phone),
            BookingField::CardNumber => Some(&mut self.card_number),
            BookingField::Expiry => Some(&mut self.expiry),
            BookingField::Cvv => Some(&mut self.cvv),
            BookingField::SpecialRequests => Some(&mut self.special_requests),
        }
    }

    pub fn quote(&self) -> Quote {
        Quote::for_duration(self.duration)
    }

    fn validate_details(&self) -> Result<(), BookingError> {
        require(&self.date, BookingField::Date)?;
        require(&self.time, BookingField::Time)?;
        require(&self.guests, BookingField::Guests)?;
        match self.guests.trim().parse::<u32>() {
            Ok(n) if (MIN_GUESTS..=MAX_GUESTS).contains(&n) => {}
            _ => return Err(BookingError::GuestCount),
        }
        require(&self.name, BookingField::Name)?;
        require(&self.email, BookingField::Email)?;
        if !looks_like_email(&self.email) {
            return Err(BookingError::Email);
        }
        require(&self.phone, BookingField::Phone)
    }

    fn validate_payment(&self) -> Result<(), BookingError> {
        require(&self.card_number, BookingField::CardNumber)?;
        require(&self.expiry, BookingField::Expiry)?;
        require(&self.cvv, BookingField::Cvv)
    }
}

fn require(value: &str, field: BookingField) -> Result<(), BookingError> {
    if value.trim().is_empty() {
        Err(BookingError::Missing(field))
    } else {
        Ok(())
    }
}

fn looks_like_email(s: &str) -> bool {
    let s = s.trim();
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Price for a booking: hourly rate times hours, half due as deposit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub hours: u32,
    pub total: u32,
    pub deposit: f64,
}

impl Quote {
    pub fn for_duration(duration: DurationHours) -> Self {
        let hours = duration.hours();
        let total = HOURLY_RATE * hours;
        Self {
            hours,
            total,
            deposit: total as f64 * DEPOSIT_RATIO,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    step: BookingStep,
    draft: BookingDraft,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn quote(&self) -> Quote {
        self.draft.quote()
    }

    /// Store a field edit. Card fields are truncated to their maximum length.
    pub fn set_field(&mut self, field: BookingField, value: &str) {
        if field == BookingField::Duration {
            self.draft.duration = DurationHours::parse(value);
            return;
        }
        let value: String = match field.max_len() {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };
        if let Some(slot) = self.draft.slot(field) {
            *slot = value;
        }
    }

    /// Validate the current step and move forward.
    pub fn submit(&mut self) -> Result<BookingStep, BookingError> {
        match self.step {
            BookingStep::Details => {
                self.draft.validate_details()?;
                self.step = BookingStep::Payment;
            }
            BookingStep::Payment => {
                self.draft.validate_payment()?;
                self.step = BookingStep::Confirmation;
                log::info!(
                    "[booking] simulated payment accepted: {}h, deposit {}",
                    self.draft.duration.hours(),
                    format_usd(self.quote().deposit)
                );
            }
            BookingStep::Confirmation => return Err(BookingError::AlreadyConfirmed),
        }
        Ok(self.step)
    }

    /// `payment → details`; every other step ignores it.
    pub fn back(&mut self) -> bool {
        if self.step == BookingStep::Payment {
            self.step = BookingStep::Details;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Format whole dollars with thousands separators; cents only when present.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let (sign, cents) = if cents < 0 { ("-", -cents) } else { ("", cents) };
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match cents % 100 {
        0 => format!("{sign}${grouped}"),
        rem => format!("{sign}${grouped}.{rem:02}"),
    }
}
