//! Contact form domain layer
//!
//! Field registry, rule set, validator and the submission controller.

mod controller;
mod field;
mod form_state;
mod rules;

pub use controller::{
    ContactForm, FormError, ValidationError, MSG_CORRECT_ERRORS, MSG_FAILED, MSG_SENT,
    STATUS_HIDE_DELAY,
};
pub use field::{ContactField, Field, FieldKind, SUBJECT_OPTIONS};
pub use form_state::{BannerKind, Form, FormState, StatusBanner, SubmissionStatus};
pub use rules::{Rule, RuleError, RuleSet};
