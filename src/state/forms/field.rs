//! Contact form field value objects

use std::fmt;

/// Subject options offered by the contact form
pub const SUBJECT_OPTIONS: &[&str] = &[
    "General",
    "Project Collaboration",
    "Job Opportunity",
    "Consultation",
    "Other",
];

/// Logical contact form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Wire name used in submitted messages
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone (optional)",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// Value is one of a fixed list (empty until chosen)
    Choice(&'static [&'static str]),
}

/// A single form input with its current value and displayed error
#[derive(Debug, Clone)]
pub struct Field {
    pub id: ContactField,
    pub kind: FieldKind,
    pub value: String,
    /// Error currently shown beside the field
    pub error: Option<String>,
}

impl Field {
    pub fn new(id: ContactField) -> Self {
        let kind = match id {
            ContactField::Message => FieldKind::Multiline,
            ContactField::Subject => FieldKind::Choice(SUBJECT_OPTIONS),
            _ => FieldKind::Text,
        };
        Self {
            id,
            kind,
            value: String::new(),
            error: None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    /// Push a character to the field value (choice fields ignore typing)
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Text if c == '\n' => {}
            FieldKind::Text | FieldKind::Multiline => self.value.push(c),
            FieldKind::Choice(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match self.kind {
            FieldKind::Text | FieldKind::Multiline => {
                self.value.pop();
            }
            FieldKind::Choice(_) => self.value.clear(),
        }
    }

    /// Step through choice options; no-op for text fields
    pub fn cycle_choice(&mut self, forward: bool) {
        let FieldKind::Choice(options) = self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options.iter().position(|o| *o == self.value);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        self.value = options[next].to_string();
    }

    /// Clear value and error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Choice(_) if self.value.is_empty() => "Select a subject".to_string(),
            FieldKind::Choice(_) => format!("◀ {} ▶", self.value),
            _ => self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_ignores_newline() {
        let mut field = Field::new(ContactField::FirstName);
        field.push_char('A');
        field.push_char('\n');
        assert_eq!(field.value, "A");
    }

    #[test]
    fn test_multiline_field_accepts_newline() {
        let mut field = Field::new(ContactField::Message);
        field.push_char('a');
        field.push_char('\n');
        field.push_char('b');
        assert_eq!(field.value, "a\nb");
    }

    #[test]
    fn test_choice_ignores_typing_and_cycles() {
        let mut field = Field::new(ContactField::Subject);
        field.push_char('x');
        assert_eq!(field.value, "");
        assert_eq!(field.display_value(), "Select a subject");

        field.cycle_choice(true);
        assert_eq!(field.value, "General");
        field.cycle_choice(false);
        assert_eq!(field.value, "Other");
        field.cycle_choice(true);
        assert_eq!(field.value, "General");
    }

    #[test]
    fn test_choice_backspace_clears_selection() {
        let mut field = Field::new(ContactField::Subject);
        field.cycle_choice(true);
        field.pop_char();
        assert!(field.value.is_empty());
    }

    #[test]
    fn test_clear_resets_value_and_error() {
        let mut field = Field::new(ContactField::Email);
        field.value = "a@b.com".into();
        field.error = Some("Valid email required".into());
        field.clear();
        assert!(field.value.is_empty());
        assert!(!field.is_invalid());
    }
}
