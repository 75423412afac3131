use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::models::job::JobDraft;

/// Form fields that can carry a blocking validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Description,
    Location,
    Requirements,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Location => "location",
            Field::Requirements => "requirements",
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            Field::Title => "Job title is required",
            Field::Description => "Description is required",
            Field::Location => "Location is required",
            Field::Requirements => "At least one requirement is required",
        }
    }
}

/// Field-keyed blocking messages. Empty means the draft may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drops the message for `field`. Returns whether one was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn flag(&mut self, field: Field) {
        self.0.insert(field, field.required_message().to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.as_str(), message)?;
            first = false;
        }
        Ok(())
    }
}

/// Checks the required fields of a draft. Pure; the caller decides what to do with the result.
pub fn validate_draft(draft: &JobDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.title.trim().is_empty() {
        errors.flag(Field::Title);
    }
    if draft.description.trim().is_empty() {
        errors.flag(Field::Description);
    }
    if draft.location.is_none() {
        errors.flag(Field::Location);
    }
    if draft.requirements.is_empty() {
        errors.flag(Field::Requirements);
    }

    errors
}
