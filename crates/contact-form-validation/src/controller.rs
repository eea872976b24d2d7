//! Form controller
//!
//! [`FormController`] owns one form's state machine and drives the document
//! through the [`FormSurface`] trait. Per submit cycle:
//!
//! ```text
//! Idle -> Validating -> ShowingErrors
//!                    -> ShowingSuccess -> (reset timer) -> Idle
//! ```
//!
//! `Validating` never outlives a call to [`FormController::on_submit`], so it is
//! not represented in [`SubmitPhase`].

use std::fmt::Debug;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::FormConfig;
use crate::feedback::{BorderTint, Feedback};
use crate::field::{BlurAction, Field};
use crate::normalize::capitalize_words;
use crate::report::{validate_submission, ContactFormValues, ValidationReport};

/// Host document operations the controller needs.
///
/// Fields the host does not have are reported as `None` by
/// [`FormSurface::value`]; writes to them must be ignored.
pub trait FormSurface {
    /// Host handle for a scheduled reset, used to cancel it
    type TimerHandle: Debug;

    fn value(&self, field: Field) -> Option<String>;

    fn set_value(&mut self, field: Field, value: &str);

    fn set_tint(&mut self, field: Field, tint: BorderTint);

    /// Reset the border of every control in the form, not only the six fields
    fn clear_all_tints(&mut self);

    /// Render both feedback regions from a single state
    fn show_feedback(&mut self, feedback: &Feedback);

    fn scroll_errors_into_view(&mut self);

    /// Restore every control of the form to its initial value
    fn reset_form(&mut self);

    /// Arrange for [`FormController::on_reset_due`] to be called with `ticket`
    /// after `delay`
    fn schedule_reset(&mut self, delay: Duration, ticket: ResetTicket) -> Self::TimerHandle;

    fn cancel_reset(&mut self, handle: Self::TimerHandle);
}

/// Identifies one scheduled reset; a timer firing with any other ticket is stale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResetTicket(pub u64);

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    ShowingErrors,
    ShowingSuccess,
}

/// Result of one submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ValidationReport),
    Accepted { reset: ResetTicket },
}

#[derive(Debug)]
struct PendingReset<H> {
    ticket: ResetTicket,
    handle: H,
}

pub struct FormController<S: FormSurface> {
    surface: S,
    config: FormConfig,
    phase: SubmitPhase,
    pending_reset: Option<PendingReset<S::TimerHandle>>,
    next_ticket: u64,
}

impl<S: FormSurface> FormController<S> {
    pub fn new(surface: S, config: FormConfig) -> Self {
        Self {
            surface,
            config,
            phase: SubmitPhase::Idle,
            pending_reset: None,
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset.is_some()
    }

    /// Current values of the fields present on the surface
    pub fn snapshot(&self) -> ContactFormValues {
        let mut values = ContactFormValues::default();
        for field in Field::ALL {
            if let Some(value) = self.surface.value(field) {
                values.set(field, value);
            }
        }
        values
    }

    /// Field lost focus: capitalize name fields, tint format fields
    pub fn on_blur(&mut self, field: Field) {
        let Some(value) = self.surface.value(field) else {
            return;
        };

        match field.blur_action() {
            BlurAction::Capitalize => {
                let normalized = capitalize_words(&value);
                if normalized != value {
                    self.surface.set_value(field, &normalized);
                }
            }
            BlurAction::Validate(format) => {
                let valid = value.is_empty() || format.is_valid(&value);
                let tint = BorderTint::for_value(&value, valid);
                debug!(%field, ?tint, "blur check");
                self.surface.set_tint(field, tint);
            }
        }
    }

    /// Keystroke in one of the six fields: drop any stale tint until next blur
    pub fn on_input(&mut self, field: Field) {
        self.surface.set_tint(field, BorderTint::Neutral);
        self.on_edit();
    }

    /// The user changed some control of the form.
    ///
    /// Cancels a pending reset when `cancel_reset_on_edit` is set, so text typed
    /// after a successful submit is not wiped by the delayed reset.
    pub fn on_edit(&mut self) {
        if self.config.cancel_reset_on_edit && self.cancel_pending_reset() {
            info!("pending form reset cancelled by user edit");
        }
    }

    /// Validate every field and render the result
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.cancel_pending_reset();
        self.surface.show_feedback(&Feedback::Hidden);

        let report = validate_submission(&self.snapshot());

        if report.has_errors() {
            for field in report.invalid_fields() {
                self.surface.set_tint(field, BorderTint::Invalid);
            }
            self.surface.show_feedback(&Feedback::Errors(report.messages()));
            self.surface.scroll_errors_into_view();
            self.phase = SubmitPhase::ShowingErrors;
            debug!(errors = report.errors.len(), "submit rejected");
            return SubmitOutcome::Rejected(report);
        }

        // Blur does not fire when focus jumps straight to submit
        for field in Field::NAME_FIELDS {
            if let Some(value) = self.surface.value(field) {
                if !value.is_empty() {
                    self.surface.set_value(field, &capitalize_words(&value));
                }
            }
        }

        self.surface
            .show_feedback(&Feedback::Success(self.config.success_message.clone()));
        self.surface.clear_all_tints();

        let ticket = ResetTicket(self.next_ticket);
        self.next_ticket += 1;
        let delay = self.config.reset_delay();
        let handle = self.surface.schedule_reset(delay, ticket);
        self.pending_reset = Some(PendingReset { ticket, handle });
        self.phase = SubmitPhase::ShowingSuccess;

        info!(?delay, "submit accepted, reset scheduled");
        SubmitOutcome::Accepted { reset: ticket }
    }

    /// Scheduled reset fired. Returns whether the form was reset.
    pub fn on_reset_due(&mut self, ticket: ResetTicket) -> bool {
        match &self.pending_reset {
            Some(pending) if pending.ticket == ticket => {}
            _ => {
                debug!(?ticket, "ignoring stale reset");
                return false;
            }
        }

        self.pending_reset = None;
        self.surface.reset_form();
        self.surface.show_feedback(&Feedback::Hidden);
        self.phase = SubmitPhase::Idle;
        debug!("form reset");
        true
    }

    fn cancel_pending_reset(&mut self) -> bool {
        match self.pending_reset.take() {
            Some(pending) => {
                self.surface.cancel_reset(pending.handle);
                true
            }
            None => false,
        }
    }
}
