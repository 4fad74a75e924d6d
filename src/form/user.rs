use serde::{Deserialize, Serialize};

use super::{check_email, Field, Form, FormErrors};

/// Location of the login page carrying the confirmation banner.
pub const REGISTERED_REDIRECT: &str =
    "/login?message=Registration%20successful!%20Please%20sign%20in.";

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

fn check_name(errors: &mut FormErrors, field: Field, label: &str, value: &str) {
    let value = value.trim();

    if value.is_empty() {
        errors.insert(field, format!("{label} is required"));
    } else if value.chars().count() < 2 {
        errors.insert(field, format!("{label} must be at least 2 characters long"));
    }
}

fn has_required_classes(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

impl Form for LoginFormData {
    const NAME: &'static str = "login";
    const FAILURE_MESSAGE: &'static str =
        "Login failed. Please check your credentials and try again.";

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        check_email(&mut errors, &self.email);

        if self.password.is_empty() {
            errors.insert(Field::Password, "Password is required");
        } else if self.password.chars().count() < 6 {
            errors.insert(Field::Password, "Password must be at least 6 characters long");
        }

        errors
    }

    #[cfg(test)] // only needed in tests
    fn set(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            _ => return false,
        }

        true
    }

    fn redirect_to(&self) -> String {
        "/".to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "email": self.email,
        })
    }
}

impl Form for RegisterFormData {
    const NAME: &'static str = "registration";
    const FAILURE_MESSAGE: &'static str = "Registration failed. Please try again.";

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        check_name(&mut errors, Field::FirstName, "First name", &self.first_name);
        check_name(&mut errors, Field::LastName, "Last name", &self.last_name);
        check_email(&mut errors, &self.email);

        if self.password.is_empty() {
            errors.insert(Field::Password, "Password is required");
        } else if self.password.chars().count() < 8 {
            errors.insert(Field::Password, "Password must be at least 8 characters long");
        } else if !has_required_classes(&self.password) {
            errors.insert(
                Field::Password,
                "Password must contain at least one lowercase letter, one uppercase letter, and one number",
            );
        }

        if self.confirm_password.is_empty() {
            errors.insert(Field::ConfirmPassword, "Please confirm your password");
        } else if self.password != self.confirm_password {
            errors.insert(Field::ConfirmPassword, "Passwords do not match");
        }

        errors
    }

    #[cfg(test)] // only needed in tests
    fn set(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }

        true
    }

    fn redirect_to(&self) -> String {
        REGISTERED_REDIRECT.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "firstName": self.first_name,
            "lastName": self.last_name,
            "email": self.email,
        })
    }
}

impl LoginFormData {
    #[cfg(test)] // only needed in tests
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl RegisterFormData {
    #[cfg(test)] // only needed in tests
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}
