use crate::config::TeamSpec;
use crate::error::Result;
use crate::filter::{apply_filters, Filter};
use crate::github::{GitHubApi, MAX_PER_PAGE};
use crate::render::{render_row, repo_row, Row, Table, ISSUES_HEADER, PULLS_HEADER};
use crate::teams::list_team_repos;
use crate::types::Repository;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::io::{self, Write};

/// Everything a command needs: the API client and the team's resolved repositories.
pub struct Context<A> {
    pub api: A,
    pub org: String,
    pub repos: Vec<Repository>,
}

impl<A: GitHubApi> Context<A> {
    /// Resolves the team's repositories up front; any failure here is fatal.
    pub async fn resolve(api: A, spec: &TeamSpec) -> Result<Self> {
        let repos = list_team_repos(&api, &spec.org, &spec.team).await?;
        info!("{} repositories in {}/{}", repos.len(), spec.org, spec.team);
        Ok(Self {
            api,
            org: spec.org.clone(),
            repos,
        })
    }

    // Repositories whose fetch fails are reported and skipped.
    pub async fn pull_rows(&self, filter: &Filter, now: DateTime<Utc>) -> Vec<Row> {
        let mut rows = Vec::new();
        for repo in &self.repos {
            match self.api.list_pulls(repo, &filter.state, MAX_PER_PAGE).await {
                Ok(pulls) => rows.extend(
                    apply_filters(&pulls, filter, now)
                        .iter()
                        .map(|p| render_row(repo, p, now)),
                ),
                Err(e) => warn!("skipping {}: failed to list pull requests: {}", repo, e),
            }
        }
        rows
    }

    pub async fn issue_rows(&self, filter: &Filter, now: DateTime<Utc>) -> Vec<Row> {
        let mut rows = Vec::new();
        for repo in &self.repos {
            match self.api.list_issues(repo, &filter.state, MAX_PER_PAGE).await {
                Ok(issues) => rows.extend(
                    apply_filters(&issues, filter, now)
                        .iter()
                        .map(|i| render_row(repo, i, now)),
                ),
                Err(e) => warn!("skipping {}: failed to list issues: {}", repo, e),
            }
        }
        rows
    }

    pub fn repo_rows(&self) -> Vec<Row> {
        self.repos.iter().map(repo_row).collect()
    }
}

pub async fn run_pulls<A: GitHubApi, W: Write>(
    ctx: &Context<A>,
    filter: &Filter,
    table: Table,
    out: &mut W,
) -> io::Result<()> {
    let mut table = table;
    table.push(Row::plain(&PULLS_HEADER));
    table.extend(ctx.pull_rows(filter, Utc::now()).await);
    table.write(out)
}

pub async fn run_issues<A: GitHubApi, W: Write>(
    ctx: &Context<A>,
    filter: &Filter,
    table: Table,
    out: &mut W,
) -> io::Result<()> {
    let mut table = table;
    table.push(Row::plain(&ISSUES_HEADER));
    table.extend(ctx.issue_rows(filter, Utc::now()).await);
    table.write(out)
}

pub fn run_list<A: GitHubApi, W: Write>(ctx: &Context<A>, table: Table, out: &mut W) -> io::Result<()> {
    let mut table = table;
    table.extend(ctx.repo_rows());
    table.write(out)
}
