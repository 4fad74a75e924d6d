use std::time::Duration;

use askama::Template;

use crate::animation::{AnimatedSection, Direction};
use crate::theme::Theme;
use component::{ButtonSize, ButtonTemplate, ButtonVariant, HeaderTemplate};

pub mod component;
pub mod error;
pub mod user;

/// A landing page card sliding in on scroll.
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub section: AnimatedSection,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub theme: Theme,
    pub header: HeaderTemplate,
    pub get_started: ButtonTemplate,
    pub features: Vec<Feature>,
    /// Closing banner dropping in below the cards.
    pub call_to_action: AnimatedSection,
    pub browse: ButtonTemplate,
}

impl IndexTemplate {
    pub fn new(theme: Theme) -> Self {
        let card = "bg-white dark:bg-gray-800 rounded-xl shadow-md p-6";

        Self {
            theme,
            header: HeaderTemplate::new(theme, "/"),
            get_started: ButtonTemplate::new("Get Started", ButtonVariant::Primary, ButtonSize::Lg),
            features: vec![
                Feature {
                    icon: "📖",
                    title: "Thousands of recipes",
                    body: "From weeknight dinners to weekend projects, find a dish for every mood and every pantry.",
                    section: AnimatedSection::new(Direction::Left).with_class(card),
                },
                Feature {
                    icon: "🗓️",
                    title: "Plan your meals",
                    body: "Lay out the week ahead and stop wondering what's for dinner.",
                    section: AnimatedSection::new(Direction::Up)
                        .with_delay(Duration::from_millis(200))
                        .with_class(card),
                },
                Feature {
                    icon: "👩‍🍳",
                    title: "Cook with the community",
                    body: "Share your creations and pick up tricks from food lovers everywhere.",
                    section: AnimatedSection::new(Direction::Right)
                        .with_delay(Duration::from_millis(400))
                        .with_class(card),
                },
            ],
            call_to_action: AnimatedSection::new(Direction::Down)
                .with_class("rounded-2xl bg-white dark:bg-gray-800 shadow-lg p-10 text-center"),
            browse: ButtonTemplate::new("Browse recipes", ButtonVariant::Secondary, ButtonSize::Lg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_sections_carry_the_reveal_rule() {
        let page = IndexTemplate::new(Theme::Light);
        let html = page.render().unwrap();

        for direction in ["left", "up", "right", "down"] {
            assert!(html.contains(&format!(r#"data-direction="{direction}""#)));
        }
        assert_eq!(html.matches("data-animate").count(), 4);
        assert!(html.contains(r#"data-threshold="0.2""#));
        assert!(html.contains(r#"data-delay="400""#));
        assert!(html.contains(&page.call_to_action.hidden_classes()));
        assert!(html.contains(&page.call_to_action.visible_classes()));
    }

    #[test]
    fn call_to_action_links_to_recipes() {
        let page = IndexTemplate::new(Theme::Dark);
        let html = page.render().unwrap();

        assert!(html.contains(r#"href="/recipes""#));
        assert!(html.contains(&page.browse.classes()));
        assert!(html.contains("Browse recipes"));
    }
}
