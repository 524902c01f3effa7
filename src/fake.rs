//! In-memory `GitHubApi` used by unit tests.

use crate::error::{ApiError, Result};
use crate::github::GitHubApi;
use crate::types::{Issue, Page, PullRequest, RepoRecord, Repository, Team, User};
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
pub struct FakeApi {
    pub team_pages: Vec<Vec<Team>>,
    pub team_repos: HashMap<u64, Vec<RepoRecord>>,
    pub pulls: HashMap<String, std::result::Result<Vec<PullRequest>, ApiError>>,
    pub issues: HashMap<String, std::result::Result<Vec<Issue>, ApiError>>,
    pub fail_team_page: Option<u32>,
    pub requested_team_pages: RefCell<Vec<u32>>,
    pub requested_states: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn with_team_pages(pages: Vec<Vec<Team>>) -> Self {
        Self {
            team_pages: pages,
            ..Default::default()
        }
    }
}

impl GitHubApi for FakeApi {
    async fn list_teams(&self, _org: &str, page: u32) -> Result<Page<Team>> {
        self.requested_team_pages.borrow_mut().push(page);
        if self.fail_team_page == Some(page) {
            return Err(ApiError {
                code: "upstream_error".into(),
                message: "boom".into(),
                status: Some(502),
            }
            .into());
        }
        let total = self.team_pages.len() as u32;
        let items = self
            .team_pages
            .get(page.saturating_sub(1) as usize)
            .cloned()
            .unwrap_or_default();
        let (next_page, last_page) = if page < total {
            (Some(page + 1), Some(total))
        } else {
            (None, None)
        };
        Ok(Page {
            items,
            next_page,
            last_page,
        })
    }

    async fn list_team_repos(&self, team_id: u64, _per_page: u32) -> Result<Vec<RepoRecord>> {
        Ok(self.team_repos.get(&team_id).cloned().unwrap_or_default())
    }

    async fn list_pulls(
        &self,
        repo: &Repository,
        state: &str,
        _per_page: u32,
    ) -> Result<Vec<PullRequest>> {
        self.requested_states.borrow_mut().push(state.to_string());
        match self.pulls.get(&repo.to_string()) {
            Some(Ok(items)) => Ok(items.clone()),
            Some(Err(e)) => Err(e.clone().into()),
            None => Ok(Vec::new()),
        }
    }

    async fn list_issues(
        &self,
        repo: &Repository,
        state: &str,
        _per_page: u32,
    ) -> Result<Vec<Issue>> {
        self.requested_states.borrow_mut().push(state.to_string());
        match self.issues.get(&repo.to_string()) {
            Some(Ok(items)) => Ok(items.clone()),
            Some(Err(e)) => Err(e.clone().into()),
            None => Ok(Vec::new()),
        }
    }
}

pub fn team(id: u64, name: &str, slug: &str) -> Team {
    Team {
        id,
        name: name.into(),
        slug: slug.into(),
    }
}

pub fn repo_record(owner: &str, name: &str) -> RepoRecord {
    RepoRecord {
        name: name.into(),
        owner: User {
            login: owner.into(),
        },
        description: Some(format!("{} service", name)),
    }
}

pub fn pull(number: u64, author: Option<&str>, created_at: DateTime<Utc>) -> PullRequest {
    PullRequest {
        number,
        title: format!("PR {}", number),
        state: "open".into(),
        user: author.map(|login| User {
            login: login.into(),
        }),
        milestone: None,
        created_at,
        updated_at: created_at,
    }
}
