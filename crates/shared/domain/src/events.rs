use crate::culture::Culture;
use serde::Serialize;
use std::fmt;

/// Emitted once per effective active-culture change, after every bundle has
/// been refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CultureChanged {
    pub previous: Option<Culture>,
    pub current: Option<Culture>,
}

impl fmt::Display for CultureChanged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |culture: &Option<Culture>| {
            culture.as_ref().map_or_else(|| "<default>".to_owned(), ToString::to_string)
        };
        write!(f, "{} -> {}", label(&self.previous), label(&self.current))
    }
}
