use askama::Template;

use crate::form::Field;
use crate::theme::Theme;

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-lg focus:outline-none focus:ring-2 focus:ring-orange-500 dark:bg-gray-700 dark:text-white";
const INPUT_ERROR_CLASSES: &str = "w-full px-3 py-2 border border-red-500 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500 dark:bg-gray-700 dark:text-white";

#[derive(Template)]
#[template(path = "component/input.html")]
pub struct InputTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub input_type: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub required: bool,
}

impl InputTemplate {
    pub fn new(
        field: Field,
        input_type: &'static str,
        label: &'static str,
        placeholder: &'static str,
    ) -> Self {
        Self {
            id: field.as_str(),
            name: field.as_str(),
            input_type,
            label,
            placeholder,
            value: String::new(),
            error: None,
            required: true,
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_error(mut self, error: Option<&str>) -> Self {
        self.error = error.map(str::to_string);
        self
    }

    pub fn input_classes(&self) -> &'static str {
        if self.error.is_some() {
            INPUT_ERROR_CLASSES
        } else {
            INPUT_CLASSES
        }
    }

    /// Classes the script swaps in once the user edits an errored input.
    pub fn valid_classes(&self) -> &'static str {
        INPUT_CLASSES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    Md,
    Lg,
}

#[derive(Template)]
#[template(path = "component/button.html")]
pub struct ButtonTemplate {
    pub label: &'static str,
    pub loading_label: Option<&'static str>,
    pub button_type: &'static str,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub class_name: &'static str,
    pub disabled: bool,
}

impl ButtonTemplate {
    pub fn new(label: &'static str, variant: ButtonVariant, size: ButtonSize) -> Self {
        Self {
            label,
            loading_label: None,
            button_type: "button",
            variant,
            size,
            class_name: "",
            disabled: false,
        }
    }

    /// Large primary submit button spanning the form.
    pub fn submit(label: &'static str, loading_label: &'static str) -> Self {
        Self {
            loading_label: Some(loading_label),
            button_type: "submit",
            class_name: "w-full",
            ..Self::new(label, ButtonVariant::Primary, ButtonSize::Lg)
        }
    }

    pub fn classes(&self) -> String {
        let base = "font-medium rounded-lg transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed";
        let variant = match self.variant {
            ButtonVariant::Primary => "bg-orange-500 hover:bg-orange-600 text-white focus:ring-orange-500",
            ButtonVariant::Secondary => "bg-gray-200 hover:bg-gray-300 text-gray-900 focus:ring-gray-500",
            ButtonVariant::Outline => "border border-orange-500 text-orange-500 hover:bg-orange-50 focus:ring-orange-500",
        };
        let size = match self.size {
            ButtonSize::Sm => "px-3 py-1.5 text-sm",
            ButtonSize::Md => "px-4 py-2 text-base",
            ButtonSize::Lg => "px-6 py-3 text-lg",
        };

        [base, variant, size, self.class_name]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Template)]
#[template(path = "component/theme_toggle.html")]
pub struct ThemeToggleTemplate {
    pub theme: Theme,
    pub return_to: String,
}

impl ThemeToggleTemplate {
    pub fn new(theme: Theme, return_to: impl Into<String>) -> Self {
        Self {
            theme,
            return_to: return_to.into(),
        }
    }

    pub fn label(&self) -> &'static str {
        if self.theme.is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    }
}

#[derive(Template)]
#[template(path = "component/header.html")]
pub struct HeaderTemplate {
    pub show_auth_buttons: bool,
    pub login: ButtonTemplate,
    pub sign_up: ButtonTemplate,
    pub toggle: ThemeToggleTemplate,
}

impl HeaderTemplate {
    pub fn new(theme: Theme, return_to: impl Into<String>) -> Self {
        Self {
            show_auth_buttons: true,
            login: ButtonTemplate::new("Login", ButtonVariant::Outline, ButtonSize::Sm),
            sign_up: ButtonTemplate::new("Sign Up", ButtonVariant::Primary, ButtonSize::Md),
            toggle: ThemeToggleTemplate::new(theme, return_to),
        }
    }
}
