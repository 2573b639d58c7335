//! Contact form controller
//!
//! Drives the form through its submission lifecycle:
//!
//! ```text
//! Idle -> Validating -> Invalid -> Idle
//!                    -> Valid -> Submitting -> Success | Error -> Idle
//! ```
//!
//! The controller owns the [`FormState`]. UI code feeds it discrete events
//! (`on_input`, `on_blur`, `on_submit`, `settle`, `tick`) and renders from
//! the state afterwards.

use super::field::ContactField;
use super::form_state::{BannerKind, Form, FormState, StatusBanner, SubmissionStatus};
use super::rules::{RuleError, RuleSet};
use crate::contact::{ContactMessage, SendError};
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

/// How long a settled status banner stays on screen
pub const STATUS_HIDE_DELAY: Duration = Duration::from_secs(5);

pub const MSG_CORRECT_ERRORS: &str = "Please correct the errors";
pub const MSG_SENT: &str = "Message sent successfully!";
pub const MSG_FAILED: &str = "Submission failed. Try again.";

/// A field that failed its rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: ContactField,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Why a submit attempt was not started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} field(s) failed validation", .0.len())]
    Validation(Vec<ValidationError>),
    #[error("a submission is already in flight")]
    InFlight,
}

/// Validation and submission controller for the contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    state: FormState,
    rules: RuleSet,
}

impl ContactForm {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            state: FormState::default(),
            rules,
        }
    }

    /// Contact form with the standard rule set
    pub fn with_contact_rules() -> Result<Self, RuleError> {
        Ok(Self::new(RuleSet::contact()?))
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Whether the field's rule rejects an empty value
    pub fn is_required(&self, field: ContactField) -> bool {
        self.rules.get(field).is_some_and(|rule| rule.required)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.status == SubmissionStatus::Submitting
    }

    /// A keystroke changed the field: hide its error until the next blur or submit
    pub fn on_input(&mut self, field: ContactField) {
        self.state.render_error(field, None);
    }

    /// The field lost focus: validate it and show or clear its error
    pub fn on_blur(&mut self, field: ContactField) {
        let error = self.rules.validate(field, self.state.read_value(field));
        self.state.render_error(field, error);
    }

    /// Type into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.state.focused() {
            self.state.field_mut(field).push_char(c);
            self.on_input(field);
        }
    }

    /// Delete from the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.state.focused() {
            self.state.field_mut(field).pop_char();
            self.on_input(field);
        }
    }

    /// Step the focused choice field
    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(field) = self.state.focused() {
            let before = self.state.read_value(field).to_string();
            self.state.field_mut(field).cycle_choice(forward);
            if self.state.read_value(field) != before {
                self.on_input(field);
            }
        }
    }

    /// Move focus forward, blurring the field being left
    pub fn focus_next(&mut self) {
        self.blur_focused();
        self.state.next_field();
    }

    /// Move focus backward, blurring the field being left
    pub fn focus_prev(&mut self) {
        self.blur_focused();
        self.state.prev_field();
    }

    /// Blur whichever field currently has focus
    pub fn blur_focused(&mut self) {
        if let Some(field) = self.state.focused() {
            self.on_blur(field);
        }
    }

    /// Validate every field and, when all pass, enter `Submitting`.
    ///
    /// Returns the message to hand to a sender; the caller must report the
    /// outcome through [`ContactForm::settle`].
    pub fn on_submit(&mut self) -> Result<ContactMessage, FormError> {
        if self.is_submitting() {
            tracing::debug!("submit ignored: submission already in flight");
            return Err(FormError::InFlight);
        }

        self.state.status = SubmissionStatus::Validating;

        let mut errors = Vec::new();
        for field in ContactField::ALL {
            let error = self.rules.validate(field, self.state.read_value(field));
            if let Some(ref message) = error {
                errors.push(ValidationError {
                    field,
                    message: message.clone(),
                });
            }
            self.state.render_error(field, error);
        }

        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "submit rejected by validation");
            self.state.banner = Some(StatusBanner {
                kind: BannerKind::Error,
                message: MSG_CORRECT_ERRORS.to_string(),
                hide_at: None,
            });
            self.state.status = SubmissionStatus::Idle;
            return Err(FormError::Validation(errors));
        }

        let message = ContactMessage::new(self.state.values());
        self.state.status = SubmissionStatus::Submitting;
        self.state.submit_enabled = false;
        self.state.loading = true;
        tracing::info!(id = %message.id, "contact submission started");
        Ok(message)
    }

    /// Record the outcome of the in-flight submission
    pub fn settle(&mut self, result: Result<(), SendError>, now: Instant) {
        if !self.is_submitting() {
            tracing::warn!("settle without a submission in flight; ignoring");
            return;
        }

        self.state.submit_enabled = true;
        self.state.loading = false;

        let (kind, message) = match result {
            Ok(()) => {
                tracing::info!("contact submission succeeded");
                self.state.reset();
                self.state.status = SubmissionStatus::Success;
                (BannerKind::Success, MSG_SENT)
            }
            Err(e) => {
                tracing::warn!("contact submission failed: {e}");
                self.state.status = SubmissionStatus::Error;
                (BannerKind::Error, MSG_FAILED)
            }
        };

        self.state.banner = Some(StatusBanner {
            kind,
            message: message.to_string(),
            hide_at: Some(now + STATUS_HIDE_DELAY),
        });
    }

    /// Hide an expired banner and return a settled form to `Idle`
    pub fn tick(&mut self, now: Instant) {
        let expired = self
            .state
            .banner
            .as_ref()
            .is_some_and(|banner| banner.is_expired(now));
        if expired {
            self.state.banner = None;
            if matches!(
                self.state.status,
                SubmissionStatus::Success | SubmissionStatus::Error
            ) {
                self.state.status = SubmissionStatus::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactSender, MockContactSender};
    use pretty_assertions::assert_eq;

    fn form() -> ContactForm {
        ContactForm::with_contact_rules().unwrap()
    }

    fn fill(form: &mut ContactForm, values: &[(ContactField, &str)]) {
        for (field, value) in values {
            form.state_mut().field_mut(*field).value = value.to_string();
        }
    }

    fn fill_valid(form: &mut ContactForm) {
        fill(
            form,
            &[
                (ContactField::FirstName, "Ada"),
                (ContactField::LastName, "Lovelace"),
                (ContactField::Email, "ada@example.com"),
                (ContactField::Subject, "General"),
                (ContactField::Message, "Hello there, nice site"),
            ],
        );
    }

    fn errors(form: &ContactForm) -> Vec<(ContactField, String)> {
        form.state()
            .fields()
            .iter()
            .filter_map(|f| f.error.clone().map(|e| (f.id, e)))
            .collect()
    }

    #[test]
    fn test_required_fields_come_from_rules() {
        let form = form();
        assert!(!form.is_required(ContactField::Phone));
        assert!(form.is_required(ContactField::Email));
        assert!(form.is_required(ContactField::Subject));
        // A form without rules marks nothing
        assert!(!ContactForm::new(RuleSet::default()).is_required(ContactField::Email));
    }

    mod display_sync {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blur_shows_error_for_invalid_value() {
            let mut form = form();
            fill(&mut form, &[(ContactField::Email, "nope")]);
            form.on_blur(ContactField::Email);
            assert_eq!(
                errors(&form),
                vec![(ContactField::Email, "Valid email required".to_string())]
            );
        }

        #[test]
        fn test_blur_clears_error_for_valid_value() {
            let mut form = form();
            form.state_mut()
                .render_error(ContactField::Email, Some("Valid email required".into()));
            fill(&mut form, &[(ContactField::Email, "a@b.com")]);
            form.on_blur(ContactField::Email);
            assert!(errors(&form).is_empty());
        }

        #[test]
        fn test_input_clears_error_even_when_still_invalid() {
            let mut form = form();
            form.on_blur(ContactField::FirstName);
            assert!(form.state().field(ContactField::FirstName).is_invalid());

            form.state_mut().focus(ContactField::FirstName);
            form.input_char('1');
            assert!(!form.state().field(ContactField::FirstName).is_invalid());
            assert_eq!(form.state().read_value(ContactField::FirstName), "1");
        }

        #[test]
        fn test_focus_next_blurs_field_being_left() {
            let mut form = form();
            form.focus_next();
            assert_eq!(
                errors(&form),
                vec![(
                    ContactField::FirstName,
                    "First name must be at least 2 letters".to_string()
                )]
            );
            assert_eq!(form.state().focused(), Some(ContactField::LastName));
        }

        #[test]
        fn test_focus_prev_from_submit_does_not_validate() {
            let mut form = form();
            form.state_mut().set_active_field(ContactField::ALL.len());
            form.focus_prev();
            assert!(errors(&form).is_empty());
            assert_eq!(form.state().focused(), Some(ContactField::Message));
        }

        #[test]
        fn test_cycle_choice_clears_subject_error() {
            let mut form = form();
            form.on_blur(ContactField::Subject);
            form.state_mut().focus(ContactField::Subject);
            form.cycle_choice(true);
            assert_eq!(form.state().read_value(ContactField::Subject), "General");
            assert!(!form.state().field(ContactField::Subject).is_invalid());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_single_invalid_field_rejects_submit() {
            let mut form = form();
            fill(
                &mut form,
                &[
                    (ContactField::FirstName, "A"),
                    (ContactField::LastName, "Doe"),
                    (ContactField::Email, "a@b.com"),
                    (ContactField::Subject, "General"),
                    (ContactField::Message, "Hello there"),
                ],
            );

            let result = form.on_submit();

            assert_eq!(
                result,
                Err(FormError::Validation(vec![ValidationError {
                    field: ContactField::FirstName,
                    message: "First name must be at least 2 letters".to_string(),
                }]))
            );
            assert_eq!(
                errors(&form),
                vec![(
                    ContactField::FirstName,
                    "First name must be at least 2 letters".to_string()
                )]
            );
            assert_eq!(form.state().status, SubmissionStatus::Idle);
            assert!(form.state().submit_enabled);
            let banner = form.state().banner.clone().unwrap();
            assert_eq!(banner.kind, BannerKind::Error);
            assert_eq!(banner.message, MSG_CORRECT_ERRORS);
            assert_eq!(banner.hide_at, None);
        }

        #[test]
        fn test_submit_refreshes_every_field() {
            let mut form = form();
            fill(&mut form, &[(ContactField::Email, "a@b.com")]);
            form.state_mut()
                .render_error(ContactField::Email, Some("stale".into()));

            let Err(FormError::Validation(found)) = form.on_submit() else {
                panic!("expected validation failure");
            };

            let fields: Vec<_> = found.iter().map(|e| e.field).collect();
            assert_eq!(
                fields,
                vec![
                    ContactField::FirstName,
                    ContactField::LastName,
                    ContactField::Subject,
                    ContactField::Message,
                ]
            );
            assert!(!form.state().field(ContactField::Email).is_invalid());
        }

        #[test]
        fn test_valid_submit_enters_submitting_and_disables_control() {
            let mut form = form();
            fill_valid(&mut form);

            let message = form.on_submit().unwrap();

            assert_eq!(form.state().status, SubmissionStatus::Submitting);
            assert!(!form.state().submit_enabled);
            assert!(form.state().loading);
            assert_eq!(message.get("firstName"), Some("Ada"));
            assert_eq!(message.get("phone"), Some(""));
        }

        #[test]
        fn test_second_submit_while_in_flight_is_refused() {
            let mut form = form();
            fill_valid(&mut form);
            form.on_submit().unwrap();

            assert_eq!(form.on_submit(), Err(FormError::InFlight));
            assert_eq!(form.state().status, SubmissionStatus::Submitting);
            assert!(!form.state().submit_enabled);
        }

        #[test]
        fn test_success_clears_fields_and_schedules_hide() {
            let mut form = form();
            fill_valid(&mut form);
            form.on_submit().unwrap();

            let now = Instant::now();
            form.settle(Ok(()), now);

            assert_eq!(form.state().status, SubmissionStatus::Success);
            assert!(form.state().submit_enabled);
            assert!(!form.state().loading);
            assert!(form.state().fields().iter().all(|f| f.value.is_empty()));
            assert_eq!(
                form.state().banner,
                Some(StatusBanner {
                    kind: BannerKind::Success,
                    message: MSG_SENT.to_string(),
                    hide_at: Some(now + STATUS_HIDE_DELAY),
                })
            );

            form.tick(now + Duration::from_millis(4999));
            assert!(form.state().banner.is_some());

            form.tick(now + STATUS_HIDE_DELAY);
            assert!(form.state().banner.is_none());
            assert_eq!(form.state().status, SubmissionStatus::Idle);
        }

        #[test]
        fn test_failure_keeps_fields_and_reenables_control() {
            let mut form = form();
            fill_valid(&mut form);
            form.on_submit().unwrap();

            let now = Instant::now();
            form.settle(Err(SendError::Transport("down".into())), now);

            assert_eq!(form.state().status, SubmissionStatus::Error);
            assert!(form.state().submit_enabled);
            assert!(!form.state().loading);
            assert_eq!(form.state().read_value(ContactField::FirstName), "Ada");
            let banner = form.state().banner.clone().unwrap();
            assert_eq!(banner.kind, BannerKind::Error);
            assert_eq!(banner.message, MSG_FAILED);

            form.tick(now + STATUS_HIDE_DELAY);
            assert!(form.state().banner.is_none());
            assert_eq!(form.state().read_value(ContactField::FirstName), "Ada");
        }

        #[test]
        fn test_resubmit_after_failure() {
            let mut form = form();
            fill_valid(&mut form);
            form.on_submit().unwrap();
            form.settle(Err(SendError::Rejected("no".into())), Instant::now());

            assert!(form.on_submit().is_ok());
            assert_eq!(form.state().status, SubmissionStatus::Submitting);
        }

        #[test]
        fn test_settle_without_submission_is_ignored() {
            let mut form = form();
            fill_valid(&mut form);
            form.settle(Ok(()), Instant::now());
            assert_eq!(form.state().status, SubmissionStatus::Idle);
            assert_eq!(form.state().read_value(ContactField::FirstName), "Ada");
            assert!(form.state().banner.is_none());
        }

        #[test]
        fn test_new_banner_is_not_hidden_by_old_deadline() {
            let mut form = form();
            fill_valid(&mut form);
            form.on_submit().unwrap();
            let settled_at = Instant::now();
            form.settle(Err(SendError::Transport("down".into())), settled_at);

            // Invalidate and resubmit: sticky validation banner replaces the settled one
            fill(&mut form, &[(ContactField::Email, "bad")]);
            assert!(form.on_submit().is_err());

            form.tick(settled_at + STATUS_HIDE_DELAY);
            let banner = form.state().banner.clone().unwrap();
            assert_eq!(banner.message, MSG_CORRECT_ERRORS);
        }

        #[test]
        fn test_validation_banner_does_not_auto_hide() {
            let mut form = form();
            let _ = form.on_submit();
            form.tick(Instant::now() + Duration::from_secs(60));
            assert!(form.state().banner.is_some());
        }
    }

    mod with_sender {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_delivered_message_resets_form() {
            let mut sender = MockContactSender::new();
            sender
                .expect_send()
                .withf(|m| m.get("email") == Some("ada@example.com"))
                .times(1)
                .returning(|_| Ok(()));

            let mut form = form();
            fill_valid(&mut form);

            let message = form.on_submit().unwrap();
            form.settle(sender.send(message).await, Instant::now());
            assert_eq!(form.state().status, SubmissionStatus::Success);
            assert_eq!(form.state().banner.as_ref().unwrap().message, MSG_SENT);
            assert!(form.state().fields().iter().all(|f| f.value.is_empty()));
        }

        #[tokio::test]
        async fn test_failed_delivery_keeps_values() {
            let mut sender = MockContactSender::new();
            sender
                .expect_send()
                .times(1)
                .returning(|_| Err(SendError::Transport("offline".into())));

            let mut form = form();
            fill_valid(&mut form);

            let message = form.on_submit().unwrap();
            let result = sender.send(message).await;
            assert_eq!(result, Err(SendError::Transport("offline".into())));
            form.settle(result, Instant::now());
            assert_eq!(form.state().status, SubmissionStatus::Error);
            assert_eq!(form.state().banner.as_ref().unwrap().message, MSG_FAILED);
            assert_eq!(form.state().read_value(ContactField::LastName), "Lovelace");
            assert!(form.state().submit_enabled);
        }

        #[tokio::test]
        async fn test_invalid_form_never_reaches_sender() {
            let mut sender = MockContactSender::new();
            sender.expect_send().times(0);

            let mut form = form();
            if let Ok(message) = form.on_submit() {
                let _ = sender.send(message).await;
            }
            assert!(form.state().has_errors());
        }
    }
}
