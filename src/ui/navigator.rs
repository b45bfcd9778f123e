//! Screens driven by navigate and dismiss actions.
//!
//! Screens are grouped into presentations. A pushed screen joins the top
//! presentation; a presented screen opens a new modal presentation on top.

use std::collections::BTreeMap;

use crate::loader::{NavigationType, ScreenConfig};
use crate::schema::ValueMap;

/// What a dismiss did.
#[derive(Debug, Clone, PartialEq)]
pub enum Dismissal {
    /// The top screen was popped within its presentation and this one is
    /// showing again.
    Popped { revealed: Box<ScreenConfig> },
    /// The top modal presentation was closed, revealing this screen.
    ModalClosed { revealed: Box<ScreenConfig> },
    /// Only the root was left, so everything was closed.
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    presentations: Vec<Vec<ScreenConfig>>,
}

impl Navigator {
    pub fn new(root: ScreenConfig) -> Self {
        Self {
            presentations: vec![vec![root]],
        }
    }

    pub fn current(&self) -> Option<&ScreenConfig> {
        self.presentations.last().and_then(|screens| screens.last())
    }

    /// Title of the showing screen, if it has one.
    pub fn title(&self) -> Option<&str> {
        self.current()?.navigation_title.as_deref()
    }

    /// Screens across every presentation.
    pub fn depth(&self) -> usize {
        self.presentations.iter().map(Vec::len).sum()
    }

    /// Open presentations, the root one included.
    pub fn presentation_count(&self) -> usize {
        self.presentations.len()
    }

    pub fn is_closed(&self) -> bool {
        self.presentations.is_empty()
    }

    /// Open the screen at `route`. Parameters are passed on as query strings.
    pub fn navigate(&mut self, route: &str, parameters: &ValueMap) -> &ScreenConfig {
        let config = ScreenConfig::custom(route, stringify(parameters))
            .with_navigation_type(NavigationType::Push);
        self.open(config)
    }

    pub fn open(&mut self, config: ScreenConfig) -> &ScreenConfig {
        tracing::info!(
            endpoint = %config.endpoint,
            title = config.navigation_title.as_deref().unwrap_or(""),
            navigation = ?config.navigation_type,
            depth = self.depth() + 1,
            "Opening screen"
        );
        match self.presentations.last_mut() {
            Some(screens) if config.navigation_type == NavigationType::Push => {
                screens.push(config)
            }
            _ => self.presentations.push(vec![config]),
        }
        let screens = &self.presentations[self.presentations.len() - 1];
        &screens[screens.len() - 1]
    }

    /// Pop the top screen of its presentation. A presentation showing only
    /// its first screen is closed instead.
    pub fn dismiss(&mut self, animated: bool) -> Dismissal {
        let Some(top) = self.presentations.last_mut() else {
            return Dismissal::Closed;
        };
        if top.len() > 1 {
            top.pop();
            if let Some(revealed) = self.current() {
                tracing::info!(animated, depth = self.depth(), "Popped screen");
                return Dismissal::Popped {
                    revealed: Box::new(revealed.clone()),
                };
            }
        }

        self.presentations.pop();
        match self.current() {
            Some(revealed) => {
                tracing::info!(animated, depth = self.depth(), "Closed modal presentation");
                Dismissal::ModalClosed {
                    revealed: Box::new(revealed.clone()),
                }
            }
            None => {
                tracing::info!(animated, "Closed screen stack");
                Dismissal::Closed
            }
        }
    }
}

fn stringify(parameters: &ValueMap) -> BTreeMap<String, String> {
    parameters
        .iter()
        .map(|(key, value)| (key.clone(), value.to_plain_string()))
        .collect()
}
