//! Thin JSON helpers over reqwest for the job-board API.

use reqwest::{Method, Url};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::ApiConfig;


/// Appends `segments` to the base URL. Each segment is percent-encoded on its
/// own, so ids coming from clients cannot add or climb path levels.
pub fn endpoint_url(base_url: &str, segments: &[&str]) -> anyhow::Result<Url> {
    if let Some(bad) = segments.iter().find(|s| matches!(s.trim(), "" | "." | "..")) {
        anyhow::bail!("invalid path segment {bad:?}");
    }
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("{base_url} cannot be used as a base url"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn get_http_client(config: &ApiConfig) -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(config.timeout).build()?)
}

async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    method: Method,
    segments: &[&str],
    body: Option<&B>,
) -> anyhow::Result<T> {
    let config = ApiConfig::from_env();
    let url = endpoint_url(&config.base_url, segments)?;
    let path = url.path().to_string();
    tracing::info!("{method} {path}");
    let t0 = std::time::Instant::now();

    let client = get_http_client(&config)?;
    let mut request = client.request(method.clone(), url);
    if let Some(body) = body {
        request = request.json(body);
    }
    let response = request.send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        tracing::error!("{method} {path} failed: {status}");
        anyhow::bail!("{}: {}", status, response_txt);
    }
    tracing::debug!("{method} {path}: {} bytes in {}ms", response_txt.len(), t0.elapsed().as_millis());
    let response: T = serde_json::from_str(&response_txt)?;
    Ok(response)
}

pub async fn api_get_json<T: DeserializeOwned>(segments: &[&str]) -> anyhow::Result<T> {
    send_json::<(), T>(Method::GET, segments, None).await
}

pub async fn api_post_json<B: Serialize + ?Sized, T: DeserializeOwned>(segments: &[&str], body: &B) -> anyhow::Result<T> {
    send_json(Method::POST, segments, Some(body)).await
}

pub async fn api_put_json<B: Serialize + ?Sized, T: DeserializeOwned>(segments: &[&str], body: &B) -> anyhow::Result<T> {
    send_json(Method::PUT, segments, Some(body)).await
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_double_slashes() {
        assert_eq!(endpoint_url("http://h:1/", &["jobs", "search"]).unwrap().as_str(), "http://h:1/jobs/search");
        assert_eq!(endpoint_url("http://h:1", &["jobs"]).unwrap().as_str(), "http://h:1/jobs");
        assert_eq!(endpoint_url("http://h:1/api/", &["resumes"]).unwrap().as_str(), "http://h:1/api/resumes");
    }

    #[test]
    fn ids_stay_inside_one_segment() {
        let url = endpoint_url("http://h:1", &["jobs", "../../admin/x", "bookmark"]).unwrap();
        let segments = url.path_segments().unwrap().collect::<Vec<_>>();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], "jobs");
        assert_eq!(segments[2], "bookmark");
        assert!(!url.path().contains("/admin"), "{url}");

        let url = endpoint_url("http://h:1", &["resumes", "a b?c#d"]).unwrap();
        assert_eq!(url.path_segments().unwrap().count(), 2);
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn dot_and_empty_ids_are_rejected() {
        for id in ["", " ", ".", ".."] {
            assert!(endpoint_url("http://h:1", &["job-postings", id]).is_err(), "{id:?}");
        }
    }
}
