use crate::error::{Error, Result};
use crate::github::{GitHubApi, MAX_PER_PAGE};
use crate::types::{Repository, Team};
use log::{debug, info};

/// Finds the id of the team in `org` whose name or slug equals `team`.
///
/// Every page of the organization's teams is fetched before matching; a
/// failed page aborts the scan.
pub async fn resolve_team_id<A: GitHubApi>(api: &A, org: &str, team: &str) -> Result<u64> {
    let mut teams: Vec<Team> = Vec::new();
    let mut page = 1;
    loop {
        let fetched = api.list_teams(org, page).await?;
        teams.extend(fetched.items);
        match fetched.next_page {
            Some(next) if next > page => page = next,
            _ => break,
        }
    }
    debug!("scanned {} teams in {} ({} pages)", teams.len(), org, page);

    teams
        .iter()
        .find(|t| t.name == team || t.slug == team)
        .map(|t| t.id)
        .ok_or_else(|| Error::NotFound {
            team: team.to_string(),
            org: org.to_string(),
        })
}

/// Lists the repositories of `org/team` that `org` itself owns, in API order.
///
/// Only the first page of up to [`MAX_PER_PAGE`] repositories is read.
pub async fn list_team_repos<A: GitHubApi>(
    api: &A,
    org: &str,
    team: &str,
) -> Result<Vec<Repository>> {
    let team_id = resolve_team_id(api, org, team).await?;
    info!("resolved team {}/{} to id {}", org, team, team_id);

    let records = api.list_team_repos(team_id, MAX_PER_PAGE).await?;
    let total = records.len();
    let repos: Vec<Repository> = records
        .into_iter()
        .filter(|r| r.owner.login == org)
        .map(Repository::from)
        .collect();
    debug!(
        "team {} has {} repos, {} owned by {}",
        team_id,
        total,
        repos.len(),
        org
    );
    Ok(repos)
}
