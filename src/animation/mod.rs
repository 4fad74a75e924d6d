//! Entrance animation for page sections.
//!
//! A section starts off-screen and transparent, and slides into place the
//! first time enough of it enters the viewport. The reveal is one-shot: it
//! never reverts when the section scrolls back out.
//!
//! Pages render the hidden variant together with the observer settings and
//! the visible variant as `data-` attributes; `static/cookit.js` performs the
//! reveal in the browser under the same rule as [`AnimatedSection::observe`].

use std::time::Duration;

#[cfg(test)]
use tokio::sync::mpsc;

pub const BASE_CLASSES: &str = "transition-all duration-700 ease-out transform";
pub const VISIBLE_CLASSES: &str = "translate-x-0 translate-y-0 opacity-100";
pub const MAX_REVEAL_DELAY: Duration = Duration::from_millis(800);

/// Side the section slides in from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    #[default]
    Up,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    fn hidden_classes(&self) -> &'static str {
        match self {
            Direction::Left => "-translate-x-16 opacity-0",
            Direction::Right => "translate-x-16 opacity-0",
            Direction::Up => "translate-y-16 opacity-0",
            Direction::Down => "-translate-y-16 opacity-0",
        }
    }
}

/// Settings handed to the browser's intersection observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            root_margin: "0px 0px -50px 0px",
        }
    }
}

/// One observation of the section against the viewport.
#[cfg(test)] // only needed in tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

#[cfg(test)] // only needed in tests
impl IntersectionEntry {
    pub fn new(is_intersecting: bool, intersection_ratio: f64) -> Self {
        Self {
            is_intersecting,
            intersection_ratio,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedSection {
    direction: Direction,
    delay: Duration,
    class_name: String,
    options: ObserverOptions,
    visible: bool,
}

impl AnimatedSection {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            delay: Duration::ZERO,
            class_name: String::new(),
            options: ObserverOptions::default(),
            visible: false,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    #[cfg(test)] // only needed in tests
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Requested delay, capped at [`MAX_REVEAL_DELAY`].
    pub fn reveal_delay(&self) -> Duration {
        self.delay.min(MAX_REVEAL_DELAY)
    }

    pub fn reveal_delay_ms(&self) -> u128 {
        self.reveal_delay().as_millis()
    }

    fn compose(&self, variant: &str) -> String {
        let mut classes = format!("{BASE_CLASSES} {variant}");
        if !self.class_name.is_empty() {
            classes.push(' ');
            classes.push_str(&self.class_name);
        }
        classes
    }

    pub fn hidden_classes(&self) -> String {
        self.compose(self.direction.hidden_classes())
    }

    pub fn visible_classes(&self) -> String {
        self.compose(VISIBLE_CLASSES)
    }

    /// Classes for the current state.
    pub fn classes(&self) -> String {
        if self.visible {
            self.visible_classes()
        } else {
            self.hidden_classes()
        }
    }

    #[cfg(test)] // only needed in tests
    pub fn triggers(&self, entry: &IntersectionEntry) -> bool {
        entry.is_intersecting && entry.intersection_ratio >= self.options.threshold
    }

    /// Waits for the first qualifying entry, then reveals the section after
    /// the capped delay and stops observing.
    ///
    /// Returns whether the section ended up visible. When the sender side
    /// goes away first the section stays hidden.
    #[cfg(test)] // only needed in tests
    pub async fn observe(&mut self, mut entries: mpsc::Receiver<IntersectionEntry>) -> bool {
        if self.visible {
            return true;
        }

        while let Some(entry) = entries.recv().await {
            if self.triggers(&entry) {
                entries.close();
                tokio::time::sleep(self.reveal_delay()).await;
                self.visible = true;
                break;
            }
        }

        self.visible
    }
}
