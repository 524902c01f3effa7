use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

// Canonical shared rate metadata type used across HTTP and client layers.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RateMeta {
    pub remaining: Option<i32>,
    pub used: Option<i32>,
    pub reset_at: Option<String>,
}

/// One page of a paginated list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page: Option<u32>,
    pub last_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub login: String,
}

/// Repository record as returned by the team repositories endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub owner: User,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    pub title: String,
    #[serde(default)]
    pub due_on: Option<DateTime<Utc>>,
}

impl Milestone {
    /// A milestone without a due date is never overdue.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_on.is_some_and(|due| due < now)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub state: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read-only view shared by pull requests and issues, used for filtering and rendering.
pub trait Tracked {
    fn number(&self) -> u64;
    fn title(&self) -> &str;
    fn author_login(&self) -> Option<&str>;
    fn milestone(&self) -> Option<&Milestone>;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

macro_rules! impl_tracked {
    ($ty:ty) => {
        impl Tracked for $ty {
            fn number(&self) -> u64 {
                self.number
            }
            fn title(&self) -> &str {
                &self.title
            }
            fn author_login(&self) -> Option<&str> {
                self.user.as_ref().map(|u| u.login.as_str())
            }
            fn milestone(&self) -> Option<&Milestone> {
                self.milestone.as_ref()
            }
            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }
            fn updated_at(&self) -> DateTime<Utc> {
                self.updated_at
            }
        }
    };
}

impl_tracked!(PullRequest);
impl_tracked!(Issue);

/// A repository in the team's working set, identified by `(org, name)`.
#[derive(Debug, Clone)]
pub struct Repository {
    pub org: String,
    pub name: String,
    pub description: Option<String>,
}

impl Repository {
    pub fn new(org: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            name: name.into(),
            description: None,
        }
    }
}

impl From<RepoRecord> for Repository {
    fn from(r: RepoRecord) -> Self {
        Self {
            org: r.owner.login,
            name: r.name,
            description: r.description,
        }
    }
}

impl PartialEq for Repository {
    fn eq(&self, other: &Self) -> bool {
        self.org == other.org && self.name == other.name
    }
}

impl Eq for Repository {}

impl Hash for Repository {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.org.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.org, self.name)
    }
}

impl FromStr for Repository {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((org, name)) if !org.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Repository::new(org, name))
            }
            _ => Err(Error::config(format!(
                "repository '{}' must be in org/name format",
                s
            ))),
        }
    }
}
