//! Validation rules and the field validator

use super::field::ContactField;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

/// A rule whose pattern failed to compile
#[derive(Debug, Error)]
#[error("invalid pattern for field `{field}`")]
pub struct RuleError {
    pub field: ContactField,
    #[source]
    pub source: regex::Error,
}

/// Validation constraints for one field
#[derive(Debug, Clone)]
pub struct Rule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub message: String,
}

impl Rule {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            required: false,
            min_length: None,
            pattern: None,
            message: message.into(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }

    /// Evaluate a value; the first failing check wins.
    ///
    /// Optional fields left empty skip the length and pattern checks.
    pub fn check(&self, value: &str) -> Option<&str> {
        if value.trim().is_empty() {
            if self.required {
                return Some(&self.message);
            }
            if value.is_empty() {
                return None;
            }
        }
        if let Some(min) = self.min_length {
            if value.chars().count() < min {
                return Some(&self.message);
            }
        }
        if let Some(ref pattern) = self.pattern {
            if !pattern.is_match(value) {
                return Some(&self.message);
            }
        }
        None
    }
}

/// Static mapping from field to rule
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: HashMap<ContactField, Rule>,
}

impl RuleSet {
    /// The contact form's rules
    pub fn contact() -> Result<Self, RuleError> {
        let name_pattern = r"^[A-Za-z\s]+$";
        let compile = |field: ContactField, rule: Result<Rule, regex::Error>| {
            rule.map(|r| (field, r))
                .map_err(|source| RuleError { field, source })
        };

        let rules = [
            compile(
                ContactField::FirstName,
                Rule::new("First name must be at least 2 letters")
                    .required()
                    .min_length(2)
                    .pattern(name_pattern),
            )?,
            compile(
                ContactField::LastName,
                Rule::new("Last name must be at least 2 letters")
                    .required()
                    .min_length(2)
                    .pattern(name_pattern),
            )?,
            compile(
                ContactField::Email,
                Rule::new("Valid email required")
                    .required()
                    .pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"),
            )?,
            compile(
                ContactField::Phone,
                Rule::new("Valid phone number").pattern(r"^\+?[1-9][0-9\s\-()]{7,15}$"),
            )?,
            (
                ContactField::Subject,
                Rule::new("Please select a subject").required(),
            ),
            (
                ContactField::Message,
                Rule::new("Message at least 10 chars")
                    .required()
                    .min_length(10),
            ),
        ];

        Ok(Self {
            rules: rules.into_iter().collect(),
        })
    }

    pub fn get(&self, field: ContactField) -> Option<&Rule> {
        self.rules.get(&field)
    }

    /// Validate one field's value; `None` means valid (fields without a rule always are)
    pub fn validate(&self, field: ContactField, value: &str) -> Option<String> {
        self.get(field)
            .and_then(|rule| rule.check(value))
            .map(str::to_string)
    }
}
