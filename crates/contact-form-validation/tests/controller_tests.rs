//! Integration tests for the form controller
//!
//! Drives `FormController` against an in-memory surface that records what a
//! browser would show: field values, border tints, feedback, scrolls and
//! scheduled resets.

use std::collections::HashMap;
use std::time::Duration;

use contact_form_validation::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Default)]
struct MemorySurface {
    values: HashMap<Field, String>,
    tints: HashMap<Field, BorderTint>,
    /// Tint of controls that are not one of the six fields (e.g. a textarea)
    extra_control_tint: BorderTint,
    feedback: Feedback,
    scrolls: usize,
    scheduled: Vec<(ResetTicket, Duration)>,
    cancelled: Vec<u32>,
    next_handle: u32,
    resets: usize,
}

impl MemorySurface {
    fn with_fields(fields: &[(Field, &str)]) -> Self {
        let mut surface = Self::default();
        for (field, value) in fields {
            surface.values.insert(*field, value.to_string());
        }
        surface
    }

    fn all_fields(values: [&str; 6]) -> Self {
        let pairs: Vec<_> = Field::ALL.into_iter().zip(values).collect();
        Self::with_fields(&pairs)
    }

    fn tint(&self, field: Field) -> BorderTint {
        self.tints.get(&field).copied().unwrap_or_default()
    }

    fn value_of(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }
}

impl FormSurface for MemorySurface {
    type TimerHandle = u32;

    fn value(&self, field: Field) -> Option<String> {
        self.values.get(&field).cloned()
    }

    fn set_value(&mut self, field: Field, value: &str) {
        if let Some(slot) = self.values.get_mut(&field) {
            *slot = value.to_string();
        }
    }

    fn set_tint(&mut self, field: Field, tint: BorderTint) {
        if self.values.contains_key(&field) {
            self.tints.insert(field, tint);
        }
    }

    fn clear_all_tints(&mut self) {
        for tint in self.tints.values_mut() {
            *tint = BorderTint::Neutral;
        }
        self.extra_control_tint = BorderTint::Neutral;
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        self.feedback = feedback.clone();
    }

    fn scroll_errors_into_view(&mut self) {
        self.scrolls += 1;
    }

    fn reset_form(&mut self) {
        self.resets += 1;
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    fn schedule_reset(&mut self, delay: Duration, ticket: ResetTicket) -> u32 {
        self.scheduled.push((ticket, delay));
        self.next_handle += 1;
        self.next_handle
    }

    fn cancel_reset(&mut self, handle: u32) {
        self.cancelled.push(handle);
    }
}

fn controller(surface: MemorySurface) -> FormController<MemorySurface> {
    FormController::new(surface, FormConfig::default())
}

fn valid_form() -> MemorySurface {
    MemorySurface::all_fields(["john", "doe", "austin", "j@d.com", "78701", ""])
}

fn accepted_ticket(outcome: SubmitOutcome) -> ResetTicket {
    match outcome {
        SubmitOutcome::Accepted { reset } => reset,
        SubmitOutcome::Rejected(report) => panic!("unexpected rejection: {:?}", report),
    }
}

#[test]
fn test_all_blank_submit_reports_five_errors_in_order() {
    let mut ctrl = controller(MemorySurface::all_fields(["", "", "", "", "", ""]));

    let outcome = ctrl.on_submit();

    let SubmitOutcome::Rejected(report) = outcome else {
        panic!("blank form must be rejected");
    };
    assert_eq!(
        report.messages(),
        vec![
            "First name is required.",
            "Last name is required.",
            "City is required.",
            "Email address is required.",
            "Zip code is required.",
        ]
    );

    let surface = ctrl.surface();
    assert_eq!(surface.feedback, Feedback::Errors(report.messages()));
    assert!(!surface.feedback.success_visible());
    assert_eq!(surface.scrolls, 1);
    assert_eq!(ctrl.phase(), SubmitPhase::ShowingErrors);
    assert!(surface.scheduled.is_empty());

    for field in [Field::FirstName, Field::LastName, Field::City, Field::Email, Field::ZipCode] {
        assert_eq!(surface.tint(field), BorderTint::Invalid, "{field}");
    }
    assert_eq!(surface.tint(Field::Phone), BorderTint::Neutral);
}

#[test]
fn test_valid_submit_shows_success_then_resets() {
    let mut ctrl = controller(valid_form());
    ctrl.surface_mut().tints.insert(Field::Email, BorderTint::Valid);
    ctrl.surface_mut().extra_control_tint = BorderTint::Invalid;

    let ticket = accepted_ticket(ctrl.on_submit());

    {
        let surface = ctrl.surface();
        assert_eq!(
            surface.feedback,
            Feedback::Success("Thank you! Your message has been sent successfully.".to_string())
        );
        assert_eq!(surface.value_of(Field::FirstName), "John");
        assert_eq!(surface.value_of(Field::LastName), "Doe");
        assert_eq!(surface.value_of(Field::City), "Austin");
        assert!(surface.tints.values().all(|t| *t == BorderTint::Neutral));
        assert_eq!(surface.extra_control_tint, BorderTint::Neutral);
        assert_eq!(surface.scheduled, vec![(ticket, Duration::from_millis(3000))]);
        assert_eq!(surface.scrolls, 0);
    }
    assert_eq!(ctrl.phase(), SubmitPhase::ShowingSuccess);
    assert!(ctrl.has_pending_reset());

    assert!(ctrl.on_reset_due(ticket));

    let surface = ctrl.surface();
    assert!(surface.values.values().all(String::is_empty));
    assert_eq!(surface.feedback, Feedback::Hidden);
    assert_eq!(surface.resets, 1);
    assert_eq!(ctrl.phase(), SubmitPhase::Idle);
    assert!(!ctrl.has_pending_reset());
}

#[test]
fn test_errors_then_fix_and_resubmit() {
    let mut ctrl = controller(MemorySurface::all_fields([
        "john", "doe", "austin", "bad@", "78701", "",
    ]));

    let SubmitOutcome::Rejected(report) = ctrl.on_submit() else {
        panic!("bad email must be rejected");
    };
    assert_eq!(
        report.messages(),
        vec!["Please enter a valid email address (e.g., name@example.com)."]
    );
    assert_eq!(ctrl.surface().tint(Field::Email), BorderTint::Invalid);
    // Nothing is reset on a rejected submit
    assert_eq!(ctrl.surface().value_of(Field::Email), "bad@");

    ctrl.surface_mut().values.insert(Field::Email, "j@d.com".to_string());
    ctrl.on_input(Field::Email);
    assert_eq!(ctrl.surface().tint(Field::Email), BorderTint::Neutral);

    accepted_ticket(ctrl.on_submit());
    assert!(ctrl.surface().feedback.success_visible());
    assert!(!ctrl.surface().feedback.errors_visible());
}

#[rstest]
#[case(Field::Email, "name@example.com", BorderTint::Valid)]
#[case(Field::Email, "bad@", BorderTint::Invalid)]
#[case(Field::Email, "", BorderTint::Neutral)]
#[case(Field::ZipCode, "12345", BorderTint::Valid)]
#[case(Field::ZipCode, "1234", BorderTint::Invalid)]
#[case(Field::Phone, "123-456-7890", BorderTint::Valid)]
#[case(Field::Phone, "123-45-6789", BorderTint::Invalid)]
#[case(Field::Phone, "", BorderTint::Neutral)]
#[case(Field::Phone, "   ", BorderTint::Invalid)]
fn test_blur_tints_format_fields(
    #[case] field: Field,
    #[case] value: &str,
    #[case] expected: BorderTint,
) {
    let mut ctrl = controller(MemorySurface::with_fields(&[(field, value)]));

    ctrl.on_blur(field);

    assert_eq!(ctrl.surface().tint(field), expected);
    assert_eq!(ctrl.surface().value_of(field), value);
}

#[rstest]
#[case(Field::FirstName, "jOHN", "John")]
#[case(Field::LastName, "van  der berg", "Van  Der Berg")]
#[case(Field::City, " new york", " New York")]
fn test_blur_capitalizes_name_fields(
    #[case] field: Field,
    #[case] value: &str,
    #[case] expected: &str,
) {
    let mut ctrl = controller(MemorySurface::with_fields(&[(field, value)]));

    ctrl.on_blur(field);

    assert_eq!(ctrl.surface().value_of(field), expected);
    assert_eq!(ctrl.surface().tint(field), BorderTint::Neutral);
}

#[test]
fn test_missing_fields_are_tolerated() {
    let mut ctrl = controller(MemorySurface::with_fields(&[(Field::Email, "a@b.co")]));

    for field in Field::ALL {
        ctrl.on_blur(field);
        ctrl.on_input(field);
    }

    accepted_ticket(ctrl.on_submit());
    assert!(ctrl.surface().tints.keys().all(|f| *f == Field::Email));
}

#[test]
fn test_edit_cancels_pending_reset() {
    let mut ctrl = controller(valid_form());
    let ticket = accepted_ticket(ctrl.on_submit());

    ctrl.surface_mut().values.insert(Field::City, "dallas".to_string());
    ctrl.on_input(Field::City);

    assert!(!ctrl.has_pending_reset());
    assert_eq!(ctrl.surface().cancelled, vec![1]);

    // A timer that fires anyway must not wipe the new text
    assert!(!ctrl.on_reset_due(ticket));
    assert_eq!(ctrl.surface().value_of(Field::City), "dallas");
    assert_eq!(ctrl.surface().resets, 0);
}

#[test]
fn test_edit_on_other_control_cancels_pending_reset() {
    let mut ctrl = controller(valid_form());
    accepted_ticket(ctrl.on_submit());

    ctrl.on_edit();

    assert!(!ctrl.has_pending_reset());
}

#[test]
fn test_reset_is_unconditional_when_cancel_disabled() {
    let config = FormConfig {
        cancel_reset_on_edit: false,
        ..FormConfig::default()
    };
    let mut ctrl = FormController::new(valid_form(), config);
    let ticket = accepted_ticket(ctrl.on_submit());

    ctrl.surface_mut().values.insert(Field::City, "dallas".to_string());
    ctrl.on_input(Field::City);

    assert!(ctrl.has_pending_reset());
    assert!(ctrl.on_reset_due(ticket));
    assert_eq!(ctrl.surface().value_of(Field::City), "");
}

#[test]
fn test_resubmit_replaces_pending_reset() {
    let mut ctrl = controller(valid_form());
    let first = accepted_ticket(ctrl.on_submit());
    let second = accepted_ticket(ctrl.on_submit());

    assert_ne!(first, second);
    assert_eq!(ctrl.surface().cancelled, vec![1]);
    assert!(!ctrl.on_reset_due(first));
    assert!(ctrl.on_reset_due(second));
}

#[test]
fn test_custom_delay_is_used() {
    let config = FormConfig::from_json(r#"{"resetDelayMs": 250}"#).unwrap();
    let mut ctrl = FormController::new(valid_form(), config);

    accepted_ticket(ctrl.on_submit());

    assert_eq!(ctrl.surface().scheduled[0].1, Duration::from_millis(250));
}

#[test]
fn test_snapshot_only_contains_present_fields() {
    let ctrl = controller(MemorySurface::with_fields(&[(Field::City, "x")]));

    let snapshot = ctrl.snapshot();

    assert_eq!(snapshot, ContactFormValues::default().with(Field::City, "x"));
}
