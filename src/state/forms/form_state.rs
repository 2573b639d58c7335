//! Contact form state: field registry, submission status and status banner

use super::field::{ContactField, Field};
use std::collections::BTreeMap;
use std::time::Instant;

/// Trait for focus movement across a form's fields and actions
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Lifecycle of a form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

/// Visual tone of the status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Form-level status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: BannerKind,
    pub message: String,
    /// When the banner disappears on its own (`None` stays until replaced)
    pub hide_at: Option<Instant>,
}

impl StatusBanner {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.hide_at.is_some_and(|at| now >= at)
    }
}

/// All contact fields plus the submission status
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<Field>,
    pub status: SubmissionStatus,
    pub banner: Option<StatusBanner>,
    /// Submit control state; disabled for the whole time a submission is in flight
    pub submit_enabled: bool,
    /// Loading indicator on the submit control
    pub loading: bool,
    /// Focus index; `fields.len()` is the submit button
    active: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fields: ContactField::ALL.into_iter().map(Field::new).collect(),
            status: SubmissionStatus::Idle,
            banner: None,
            submit_enabled: true,
            loading: false,
            active: 0,
        }
    }
}

impl FormState {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: ContactField) -> &Field {
        // The registry always holds every ContactField in ALL order
        &self.fields[id as usize]
    }

    pub fn field_mut(&mut self, id: ContactField) -> &mut Field {
        &mut self.fields[id as usize]
    }

    pub fn read_value(&self, id: ContactField) -> &str {
        &self.field(id).value
    }

    /// Show (`Some`) or clear (`None`) the error beside a field
    pub fn render_error(&mut self, id: ContactField, message: Option<String>) {
        self.field_mut(id).error = message;
    }

    /// Focused field, or `None` when the submit button has focus
    pub fn focused(&self) -> Option<ContactField> {
        self.fields.get(self.active).map(|f| f.id)
    }

    pub fn focus(&mut self, id: ContactField) {
        self.active = id as usize;
    }

    pub fn submit_focused(&self) -> bool {
        self.active == self.fields.len()
    }

    /// Values keyed by wire name
    pub fn values(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.id.name().to_string(), f.value.clone()))
            .collect()
    }

    /// Clear every field (values and errors)
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(Field::is_invalid)
    }
}

impl Form for FormState {
    fn field_count(&self) -> usize {
        self.fields.len() + 1
    }

    fn active_field(&self) -> usize {
        self.active
    }

    fn set_active_field(&mut self, index: usize) {
        self.active = index.min(self.fields.len());
    }
}
