//! Overlay visibility and the modal state machine.
//!
//! Modal: `closed → info(venue) → booking(venue)`, with "book now" able to
//! jump straight from `closed` to `booking`. Closing returns to `closed` and
//! discards the booking draft. The confirmation auto-close is requested as an
//! [`Effect`] so the caller owns the actual timer.

use super::booking::{BookingError, BookingField, BookingForm, BookingStep};
use super::constants::CONFIRMATION_AUTO_CLOSE_MS;
use super::venue::Corner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Info(Corner),
    Booking(Corner),
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self != ModalState::Closed
    }

    pub fn venue(self) -> Option<Corner> {
        match self {
            ModalState::Closed => None,
            ModalState::Info(c) | ModalState::Booking(c) => Some(c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    LearnMore(Corner),
    BookNow(Corner),
    BookFromInfo,
    Close,
    Submit,
    Back,
    /// The auto-close timer armed with this generation fired.
    AutoCloseElapsed(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    ArmAutoClose {
        delay_ms: u32,
        generation: u32,
    },
    CancelAutoClose,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    pub changed: bool,
    pub effect: Effect,
}

impl Outcome {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            changed: true,
            effect: Effect::None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Presentation {
    modal: ModalState,
    booking: BookingForm,
    generation: u32,
    auto_close_armed: bool,
    last_error: Option<BookingError>,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn booking(&self) -> &BookingForm {
        &self.booking
    }

    pub fn last_error(&self) -> Option<&BookingError> {
        self.last_error.as_ref()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// The venue whose overlay card should be visible. Any open modal
    /// suppresses the overlay.
    pub fn overlay_venue(&self, active: Option<Corner>) -> Option<Corner> {
        if self.modal.is_open() {
            None
        } else {
            active
        }
    }

    pub fn set_field(&mut self, field: BookingField, value: &str) {
        if matches!(self.modal, ModalState::Booking(_)) {
            self.booking.set_field(field, value);
        }
    }

    pub fn dispatch(&mut self, action: UiAction) -> Outcome {
        match (action, self.modal) {
            (UiAction::LearnMore(corner), ModalState::Closed) => {
                self.modal = ModalState::Info(corner);
                Outcome::changed()
            }
            (UiAction::BookNow(corner), ModalState::Closed | ModalState::Info(_)) => {
                self.open_booking(corner);
                Outcome::changed()
            }
            (UiAction::BookFromInfo, ModalState::Info(corner)) => {
                self.open_booking(corner);
                Outcome::changed()
            }
            (UiAction::Close, ModalState::Info(_) | ModalState::Booking(_)) => self.close(),
            (UiAction::Submit, ModalState::Booking(_)) => self.submit(),
            (UiAction::Back, ModalState::Booking(_)) => {
                if self.booking.back() {
                    self.last_error = None;
                    Outcome::changed()
                } else {
                    Outcome::unchanged()
                }
            }
            (UiAction::AutoCloseElapsed(generation), ModalState::Booking(_)) => {
                if generation != self.generation
                    || self.booking.step() != BookingStep::Confirmation
                {
                    return Outcome::unchanged();
                }
                self.auto_close_armed = false;
                let mut outcome = self.close();
                outcome.effect = Effect::None;
                outcome
            }
            _ => Outcome::unchanged(),
        }
    }

    fn open_booking(&mut self, corner: Corner) {
        self.booking.reset();
        self.last_error = None;
        self.modal = ModalState::Booking(corner);
    }

    fn close(&mut self) -> Outcome {
        self.modal = ModalState::Closed;
        self.booking.reset();
        self.last_error = None;
        self.generation = self.generation.wrapping_add(1);
        let effect = if std::mem::take(&mut self.auto_close_armed) {
            Effect::CancelAutoClose
        } else {
            Effect::None
        };
        Outcome {
            changed: true,
            effect,
        }
    }

    fn submit(&mut self) -> Outcome {
        match self.booking.submit() {
            Ok(BookingStep::Confirmation) => {
                self.last_error = None;
                self.generation = self.generation.wrapping_add(1);
                self.auto_close_armed = true;
                Outcome {
                    changed: true,
                    effect: Effect::ArmAutoClose {
                        delay_ms: CONFIRMATION_AUTO_CLOSE_MS,
                        generation: self.generation,
                    },
                }
            }
            Ok(_) => {
                self.last_error = None;
                Outcome::changed()
            }
            Err(e) => {
                log::info!("[booking] submit rejected: {}", e);
                self.last_error = Some(e);
                Outcome::changed()
            }
        }
    }
}
