#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use super::validation::{self, Field};

/// Current text of every form field. Only `message` may legitimately stay
/// empty on a passing submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Snapshot of the field values captured at a passing submit.
///
/// Later edits leave it untouched; only the next passing submit replaces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

/// State for the contact form: field values, the visible validation errors,
/// and the last successfully submitted snapshot.
///
/// The `ContactForm` component owns this in an `RwSignal` and renders as a
/// pure function of it.
#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    values: FieldValues,
    errors: BTreeMap<Field, String>,
    submission: Option<Submission>,
}

impl ContactFormState {
    /// Store a new value for `field` and re-check that field immediately,
    /// so its error appears or clears while the user types. Errors on other
    /// fields are left as they are.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        match validation::validate(field, self.values.get(field)) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Re-check every field, keeping one error per field that fails. When
    /// all pass, replace the submission snapshot with the current values.
    /// Returns whether the submit went through.
    pub fn submit(&mut self) -> bool {
        self.errors.clear();
        for field in Field::ALL {
            if let Some(message) = validation::validate(field, self.values.get(field)) {
                self.errors.insert(field, message);
            }
        }
        if !self.errors.is_empty() {
            return false;
        }

        self.submission = Some(Submission {
            first_name: self.values.first_name.clone(),
            last_name: self.values.last_name.clone(),
            email: self.values.email.clone(),
            message: self.values.message.clone(),
        });
        true
    }

    /// Current text of one field.
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Visible error for one field, if it is currently invalid.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Number of currently visible error messages.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Last successfully submitted snapshot, if any submit has passed.
    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }
}
