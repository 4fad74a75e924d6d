use askama::Template;

use super::component::HeaderTemplate;
use crate::theme::Theme;

#[derive(Template)]
#[template(path = "error/not_found.html")]
pub struct NotFoundErrorTemplate {
    pub theme: Theme,
    pub header: HeaderTemplate,
    pub path: String,
}

impl NotFoundErrorTemplate {
    pub fn new(theme: Theme, path: impl Into<String>) -> Self {
        Self {
            theme,
            header: HeaderTemplate::new(theme, "/"),
            path: path.into(),
        }
    }
}
