#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Minimum number of characters a first name must have.
pub const FIRST_NAME_MIN_CHARS: usize = 5;

/// Fields of the contact form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields, in the order they render and validate.
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Message];

    /// Canonical field name, as worded in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// Check one field's current value. `None` means the value passes.
///
/// Each field produces at most one message. An empty email reports the
/// required-field message; the format message is reserved for non-empty
/// values that fail the shape check.
pub fn validate(field: Field, value: &str) -> Option<String> {
    match field {
        Field::FirstName => (value.chars().count() < FIRST_NAME_MIN_CHARS).then(|| {
            format!(
                "Error: {} must have at least {FIRST_NAME_MIN_CHARS} characters.",
                field.name()
            )
        }),
        Field::LastName => value
            .is_empty()
            .then(|| format!("Error: {} is a required field.", field.name())),
        Field::Email => {
            if value.is_empty() {
                Some(format!("Error: {} is a required field.", field.name()))
            } else if is_email_shaped(value) {
                None
            } else {
                Some(format!("Error: {} must be a valid email address.", field.name()))
            }
        }
        Field::Message => None,
    }
}

/// Loose email shape check: one `@` with a non-empty local part, and a
/// domain with a `.` separating non-empty labels.
fn is_email_shaped(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
