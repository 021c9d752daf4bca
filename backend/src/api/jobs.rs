//! Job listing, recommendation and bookmark endpoints.

use common::{
    filter_params::FilterParams,
    job_posting::{BookmarkStatus, JobPostingPage},
    job_query::{JobSearchQuery, JOB_LIST_PAGE_SIZE},
};
use serde::{Deserialize, Serialize};

use crate::http_utils::rest_client::api_post_json;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendRequest {
    user_id: String,
    #[serde(flatten)]
    filters: FilterParams,
    page_size: u64,
}

pub async fn search_jobs(query: JobSearchQuery, page: u64) -> anyhow::Result<JobPostingPage> {
    let request = query.to_request(page);
    tracing::info!(
        "job search: keyword={:?} page={} conditions={}",
        request.keyword,
        page,
        request.filters.selection_count()
    );
    api_post_json(&["jobs", "search"], &request).await
}

pub async fn recommend_jobs(user_id: String, filters: FilterParams) -> anyhow::Result<JobPostingPage> {
    let request = RecommendRequest { user_id, filters, page_size: JOB_LIST_PAGE_SIZE };
    api_post_json(&["jobs", "recommend"], &request).await
}

pub async fn toggle_bookmark(posting_id: String) -> anyhow::Result<BookmarkStatus> {
    api_post_json(&["jobs", posting_id.as_str(), "bookmark"], &serde_json::json!({})).await
}
