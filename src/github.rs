use crate::config::Config;
use crate::error::Result;
use crate::http::{self, encode_path_segment};
use crate::types::{Issue, Page, PullRequest, RepoRecord, Repository, Team};
use log::debug;
use reqwest::Client;

/// Largest page requested from the list endpoints in a single call.
pub const MAX_PER_PAGE: u32 = 200;

/// Paginated list operations the rest of the crate needs from GitHub.
#[allow(async_fn_in_trait)]
pub trait GitHubApi {
    async fn list_teams(&self, org: &str, page: u32) -> Result<Page<Team>>;
    async fn list_team_repos(&self, team_id: u64, per_page: u32) -> Result<Vec<RepoRecord>>;
    async fn list_pulls(
        &self,
        repo: &Repository,
        state: &str,
        per_page: u32,
    ) -> Result<Vec<PullRequest>>;
    async fn list_issues(&self, repo: &Repository, state: &str, per_page: u32) -> Result<Vec<Issue>>;
}

/// REST-backed implementation of [`GitHubApi`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    cfg: Config,
}

impl GitHubClient {
    pub fn new(cfg: Config) -> Result<Self> {
        let client = http::build_client(&cfg)?;
        Ok(Self { client, cfg })
    }
}

impl GitHubApi for GitHubClient {
    async fn list_teams(&self, org: &str, page: u32) -> Result<Page<Team>> {
        let path = format!("/orgs/{}/teams?page={}", encode_path_segment(org), page);
        let resp = http::rest_get_json::<Vec<Team>>(&self.client, &self.cfg, &path).await?;
        debug!(
            "teams page {} for {}: {} teams, next={:?} last={:?}",
            page,
            org,
            resp.value.len(),
            resp.links.next,
            resp.links.last
        );
        Ok(Page {
            items: resp.value,
            next_page: resp.links.next,
            last_page: resp.links.last,
        })
    }

    async fn list_team_repos(&self, team_id: u64, per_page: u32) -> Result<Vec<RepoRecord>> {
        let path = format!("/teams/{}/repos?per_page={}", team_id, per_page);
        let resp = http::rest_get_json::<Vec<RepoRecord>>(&self.client, &self.cfg, &path).await?;
        Ok(resp.value)
    }

    async fn list_pulls(
        &self,
        repo: &Repository,
        state: &str,
        per_page: u32,
    ) -> Result<Vec<PullRequest>> {
        let path = format!(
            "/repos/{}/{}/pulls?state={}&per_page={}",
            encode_path_segment(&repo.org),
            encode_path_segment(&repo.name),
            urlencoding::encode(state),
            per_page
        );
        let resp = http::rest_get_json::<Vec<PullRequest>>(&self.client, &self.cfg, &path).await?;
        Ok(resp.value)
    }

    async fn list_issues(
        &self,
        repo: &Repository,
        state: &str,
        per_page: u32,
    ) -> Result<Vec<Issue>> {
        let path = format!(
            "/repos/{}/{}/issues?state={}&per_page={}",
            encode_path_segment(&repo.org),
            encode_path_segment(&repo.name),
            urlencoding::encode(state),
            per_page
        );
        let resp = http::rest_get_json::<Vec<Issue>>(&self.client, &self.cfg, &path).await?;
        Ok(resp.value)
    }
}
