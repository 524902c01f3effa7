use httpmock::{Method::GET, MockServer};
use teams::config::Config;
use teams::github::{GitHubApi, GitHubClient};
use teams::teams::{list_team_repos, resolve_team_id};
use teams::types::Repository;
use teams::Error;

fn config_for(server: &MockServer) -> Config {
    Config {
        token: "t".into(),
        api_url: server.base_url(),
        api_version: "2022-11-28".into(),
        user_agent: "teams-tests".into(),
        timeout_secs: 5,
    }
}

fn link(server: &MockServer, next: u32, last: u32) -> String {
    format!(
        "<{}>; rel=\"next\", <{}>; rel=\"last\"",
        server.url(format!("/orgs/acme/teams?page={}", next)),
        server.url(format!("/orgs/acme/teams?page={}", last))
    )
}

#[tokio::test]
async fn list_teams_reads_link_header() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let link_value = link(&server, 2, 3);
    let m = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/orgs/acme/teams")
                .query_param("page", "1");
            then.status(200)
                .header("link", link_value.as_str())
                .header("x-ratelimit-remaining", "4999")
                .json_body(serde_json::json!([
                    {"id": 1, "name": "Frontend", "slug": "frontend", "privacy": "closed"}
                ]));
        })
        .await;

    let client = GitHubClient::new(config_for(&server))?;
    let page = client.list_teams("acme", 1).await?;
    m.assert_async().await;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].slug, "frontend");
    assert_eq!(page.next_page, Some(2));
    assert_eq!(page.last_page, Some(3));
    Ok(())
}

#[tokio::test]
async fn resolve_walks_all_pages() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let first_link = link(&server, 2, 2);
    let first = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/orgs/acme/teams")
                .query_param("page", "1");
            then.status(200)
                .header("link", first_link.as_str())
                .json_body(serde_json::json!([
                    {"id": 1, "name": "Frontend", "slug": "frontend"}
                ]));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/orgs/acme/teams")
                .query_param("page", "2");
            then.status(200).json_body(serde_json::json!([
                {"id": 42, "name": "Backend", "slug": "backend"}
            ]));
        })
        .await;

    let client = GitHubClient::new(config_for(&server))?;
    assert_eq!(resolve_team_id(&client, "acme", "backend").await?, 42);
    assert_eq!(first.hits_async().await, 1);
    assert_eq!(second.hits_async().await, 1);
    Ok(())
}

#[tokio::test]
async fn team_repos_end_to_end() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/orgs/acme/teams");
            then.status(200).json_body(serde_json::json!([
                {"id": 7, "name": "Frontend", "slug": "frontend"},
                {"id": 42, "name": "Backend", "slug": "backend"}
            ]));
        })
        .await;
    let repos_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/teams/42/repos")
                .query_param("per_page", "200");
            then.status(200).json_body(serde_json::json!([
                {"name": "api", "owner": {"login": "acme"}, "description": "REST API"},
                {"name": "api", "owner": {"login": "other"}, "description": null},
                {"name": "web", "owner": {"login": "acme"}}
            ]));
        })
        .await;

    let client = GitHubClient::new(config_for(&server))?;
    let repos = list_team_repos(&client, "acme", "backend").await?;
    repos_mock.assert_async().await;
    assert_eq!(
        repos,
        vec![Repository::new("acme", "api"), Repository::new("acme", "web")]
    );
    assert_eq!(repos[0].description.as_deref(), Some("REST API"));
    assert_eq!(repos[1].description, None);
    Ok(())
}

#[tokio::test]
async fn pulls_forward_state_and_decode() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/repos/acme/api/pulls")
                .query_param("state", "closed")
                .query_param("per_page", "200");
            then.status(200).json_body(serde_json::json!([{
                "number": 3,
                "title": "Add endpoint",
                "state": "closed",
                "user": {"login": "alice"},
                "milestone": {"title": "v1", "due_on": "2025-02-01T08:00:00Z"},
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-02T00:00:00Z"
            }]));
        })
        .await;

    let client = GitHubClient::new(config_for(&server))?;
    let pulls = client
        .list_pulls(&Repository::new("acme", "api"), "closed", 200)
        .await?;
    m.assert_async().await;
    assert_eq!(pulls.len(), 1);
    assert_eq!(pulls[0].user.as_ref().map(|u| u.login.as_str()), Some("alice"));
    assert!(pulls[0].milestone.as_ref().unwrap().due_on.is_some());
    Ok(())
}

#[tokio::test]
async fn http_errors_are_classified() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/orgs/acme/teams");
            then.status(401)
                .body("{\"message\":\"Bad credentials\"}");
        })
        .await;

    let client = GitHubClient::new(config_for(&server))?;
    match resolve_team_id(&client, "acme", "backend").await {
        Err(Error::Api(e)) => {
            assert_eq!(e.code, "unauthorized");
            assert_eq!(e.status, Some(401));
            assert!(e.message.contains("Bad credentials"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
    Ok(())
}
