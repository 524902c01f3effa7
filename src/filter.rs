use crate::types::Tracked;
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_STATE: &str = "open";

/// How far back the `--new` flag looks.
pub fn recent_window() -> Duration {
    Duration::hours(24)
}

/// Filter applied to pull requests or issues of every repository in a run.
///
/// `state` is forwarded to the list endpoint; the other fields are matched
/// client-side. Empty strings count as unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub milestone: Option<String>,
    pub user: Option<String>,
    pub state: String,
    pub new: bool,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            milestone: None,
            user: None,
            state: DEFAULT_STATE.to_string(),
            new: false,
        }
    }
}

impl Filter {
    fn milestone_title(&self) -> Option<&str> {
        self.milestone.as_deref().filter(|m| !m.is_empty())
    }

    fn author_login(&self) -> Option<&str> {
        self.user.as_deref().filter(|u| !u.is_empty())
    }

    pub fn matches_milestone<T: Tracked>(&self, item: &T) -> bool {
        match self.milestone_title() {
            None => true,
            Some(title) => item.milestone().is_some_and(|m| m.title == title),
        }
    }

    pub fn matches_author<T: Tracked>(&self, item: &T) -> bool {
        match self.author_login() {
            None => true,
            Some(login) => item.author_login() == Some(login),
        }
    }

    pub fn matches_recency<T: Tracked>(&self, item: &T, now: DateTime<Utc>) -> bool {
        !self.new || now - item.created_at() <= recent_window()
    }

    pub fn matches<T: Tracked>(&self, item: &T, now: DateTime<Utc>) -> bool {
        self.matches_milestone(item)
            && self.matches_author(item)
            && self.matches_recency(item, now)
    }
}

/// Returns the items matching `filter`, keeping their original order.
pub fn apply_filters<T: Tracked + Clone>(items: &[T], filter: &Filter, now: DateTime<Utc>) -> Vec<T> {
    items
        .iter()
        .filter(|item| filter.matches(*item, now))
        .cloned()
        .collect()
}
