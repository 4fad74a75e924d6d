pub mod submission;
pub mod user;

use std::collections::BTreeMap;
use std::str::FromStr;

use regex::Regex;

/// Names of the inputs a form can report an error for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// The name the field carries in the HTML form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(Field::FirstName),
            "lastName" => Ok(Field::LastName),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            "confirmPassword" => Ok(Field::ConfirmPassword),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Field-scoped messages plus an optional banner message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<Field, String>,
    general: Option<String>,
}

impl FormErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Drops the message for one field, returning whether there was one.
    #[cfg(test)] // only needed in tests
    pub fn clear(&mut self, field: Field) -> bool {
        self.fields.remove(&field).is_some()
    }

    pub fn general(&self) -> Option<&str> {
        self.general.as_deref()
    }

    pub fn set_general(&mut self, message: impl Into<String>) {
        self.general = Some(message.into());
    }

    /// A form is valid when no field carries a message.
    pub fn is_valid(&self) -> bool {
        self.fields.is_empty()
    }

    #[cfg(test)] // only needed in tests
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Behaviour shared by the login and registration forms.
pub trait Form {
    /// Label used when logging attempts.
    const NAME: &'static str;

    /// Banner shown when the submission itself fails.
    const FAILURE_MESSAGE: &'static str;

    fn validate(&self) -> FormErrors;

    /// Replaces the value of `field`. Returns `false` when the form has no
    /// such field.
    #[cfg(test)] // only needed in tests
    fn set(&mut self, field: Field, value: String) -> bool;

    /// Where the browser goes once the submission went through.
    fn redirect_to(&self) -> String;

    /// Loggable view of the form. Never includes passwords.
    fn to_json(&self) -> serde_json::Value;
}

/// Loose `text@text.text` check, anywhere in the input.
pub fn is_email_shaped(email: &str) -> bool {
    Regex::new(r"\S+@\S+\.\S+").is_ok_and(|re| re.is_match(email))
}

pub(crate) fn check_email(errors: &mut FormErrors, email: &str) {
    if email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !is_email_shaped(email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }
}
