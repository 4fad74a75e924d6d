use askama::Template;

use super::component::{ButtonTemplate, InputTemplate, ThemeToggleTemplate};
use crate::form::submission::FormState;
use crate::form::user::{LoginFormData, RegisterFormData};
use crate::form::Field;
use crate::theme::Theme;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub theme: Theme,
    pub toggle: ThemeToggleTemplate,
    pub message: Option<String>,
    pub general_error: Option<String>,
    pub email: InputTemplate,
    pub password: InputTemplate,
    pub submit: ButtonTemplate,
}

impl LoginTemplate {
    pub fn new(state: &FormState<LoginFormData>, theme: Theme, message: Option<String>) -> Self {
        let data = state.data();
        let errors = state.errors();

        Self {
            theme,
            toggle: ThemeToggleTemplate::new(theme, "/login"),
            message,
            general_error: errors.general().map(str::to_string),
            email: InputTemplate::new(Field::Email, "email", "Email Address", "Enter your email")
                .with_value(&data.email)
                .with_error(errors.get(Field::Email)),
            password: InputTemplate::new(
                Field::Password,
                "password",
                "Password",
                "Enter your password",
            )
            .with_error(errors.get(Field::Password)),
            submit: ButtonTemplate::submit("Sign In", "Signing in..."),
        }
    }
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub theme: Theme,
    pub general_error: Option<String>,
    pub first_name: InputTemplate,
    pub last_name: InputTemplate,
    pub email: InputTemplate,
    pub password: InputTemplate,
    pub confirm_password: InputTemplate,
    pub submit: ButtonTemplate,
}

impl RegisterTemplate {
    pub fn new(state: &FormState<RegisterFormData>, theme: Theme) -> Self {
        let data = state.data();
        let errors = state.errors();

        Self {
            theme,
            general_error: errors.general().map(str::to_string),
            first_name: InputTemplate::new(Field::FirstName, "text", "First Name", "John")
                .with_value(&data.first_name)
                .with_error(errors.get(Field::FirstName)),
            last_name: InputTemplate::new(Field::LastName, "text", "Last Name", "Doe")
                .with_value(&data.last_name)
                .with_error(errors.get(Field::LastName)),
            email: InputTemplate::new(
                Field::Email,
                "email",
                "Email Address",
                "john.doe@example.com",
            )
            .with_value(&data.email)
            .with_error(errors.get(Field::Email)),
            password: InputTemplate::new(
                Field::Password,
                "password",
                "Password",
                "Create a strong password",
            )
            .with_error(errors.get(Field::Password)),
            confirm_password: InputTemplate::new(
                Field::ConfirmPassword,
                "password",
                "Confirm Password",
                "Confirm your password",
            )
            .with_error(errors.get(Field::ConfirmPassword)),
            submit: ButtonTemplate::submit("Create Account", "Creating Account..."),
        }
    }
}
