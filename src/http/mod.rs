use crate::config::Config;
use crate::error::ApiError;
use crate::types::RateMeta;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Page numbers advertised by a `Link` response header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub next: Option<u32>,
    pub last: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct RestResponse<T> {
    pub value: T,
    pub rate: RateMeta,
    pub links: PageLinks,
    pub status: StatusCode,
}

pub fn build_client(cfg: &Config) -> Result<Client, ApiError> {
    let mut default_headers = HeaderMap::new();
    let ua = HeaderValue::from_str(&cfg.user_agent)
        .map_err(|e| transport_error(format!("invalid user agent: {}", e)))?;
    default_headers.insert(USER_AGENT, ua);
    // Authorization header is injected per request.
    Client::builder()
        .default_headers(default_headers)
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .use_rustls_tls()
        .build()
        .map_err(|e| transport_error(e.to_string()))
}

fn auth_header(token: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| map_status_to_error(StatusCode::UNAUTHORIZED, "malformed token".into()))
}

fn transport_error(message: String) -> ApiError {
    ApiError {
        code: "upstream_error".into(),
        message,
        status: None,
    }
}

pub fn map_status_to_error(status: StatusCode, message: String) -> ApiError {
    let code = match status {
        StatusCode::BAD_REQUEST => "bad_request",
        StatusCode::UNAUTHORIZED => "unauthorized",
        StatusCode::FORBIDDEN => "forbidden",
        StatusCode::NOT_FOUND => "not_found",
        StatusCode::CONFLICT => "conflict",
        StatusCode::UNPROCESSABLE_ENTITY => "validation_failed",
        StatusCode::TOO_MANY_REQUESTS => "rate_limited",
        s if s.is_server_error() => "upstream_error",
        _ => "server_error",
    };
    ApiError {
        code: code.to_string(),
        message,
        status: Some(status.as_u16()),
    }
}

pub fn extract_rate_from_rest(headers: &HeaderMap) -> RateMeta {
    let remaining = headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<i32>().ok());
    let used = headers
        .get("x-ratelimit-used")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<i32>().ok());
    let reset_at = headers
        .get("x-ratelimit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|epoch| chrono::DateTime::<chrono::Utc>::from_timestamp(epoch, 0))
        .map(|at| at.to_rfc3339());
    RateMeta {
        remaining,
        used,
        reset_at,
    }
}

/// Reads the `next` and `last` page numbers out of a GitHub `Link` header.
/// Missing header or unparsable entries leave the corresponding field empty.
pub fn parse_link_header(headers: &HeaderMap) -> PageLinks {
    let mut links = PageLinks::default();
    let Some(raw) = headers.get(LINK).and_then(|v| v.to_str().ok()) else {
        return links;
    };
    for entry in raw.split(',') {
        let mut parts = entry.split(';');
        let Some(target) = parts.next() else { continue };
        let target = target.trim().trim_start_matches('<').trim_end_matches('>');
        let page = Url::parse(target).ok().and_then(|u| {
            u.query_pairs()
                .find(|(k, _)| k == "page")
                .and_then(|(_, v)| v.parse::<u32>().ok())
        });
        for param in parts {
            match param.trim() {
                "rel=\"next\"" => links.next = page,
                "rel=\"last\"" => links.last = page,
                _ => {}
            }
        }
    }
    links
}

pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

pub async fn rest_get_json<T: for<'de> Deserialize<'de>>(
    client: &Client,
    cfg: &Config,
    path: &str,
) -> Result<RestResponse<T>, ApiError> {
    let url = format!("{}{}", cfg.api_url, path);
    debug!("REST GET {}", url);
    let res = client
        .get(&url)
        .header(AUTHORIZATION, auth_header(&cfg.token)?)
        .header("X-GitHub-Api-Version", &cfg.api_version)
        .header(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        )
        .send()
        .await
        .map_err(|e| transport_error(e.to_string()))?;

    let status = res.status();
    let headers = res.headers().clone();
    let rate = extract_rate_from_rest(&headers);
    debug!(
        "REST GET {} -> {} (rate remaining {:?})",
        url, status, rate.remaining
    );

    if !status.is_success() {
        let text = res.text().await.unwrap_or_default();
        return Err(map_status_to_error(status, text));
    }

    let value = res.json::<T>().await.map_err(|e| ApiError {
        code: "server_error".into(),
        message: e.to_string(),
        status: Some(status.as_u16()),
    })?;
    Ok(RestResponse {
        value,
        rate,
        links: parse_link_header(&headers),
        status,
    })
}
