//! Client API calls for job-board endpoints.

use common::{
    filter_params::FilterParams,
    job_posting::{BookmarkStatus, JobPostingDetail, JobPostingDraft, JobPostingPage},
    job_query::JobSearchQuery,
    resume::{ResumeDetail, ResumeDraft},
};
use dioxus::prelude::*;


#[cfg(feature = "server")]
fn server_error(e: anyhow::Error) -> ServerFnError {
    ServerFnError::ServerError { message: e.to_string(), code: 500, details: None }
}

#[server]
pub async fn search_jobs(query: JobSearchQuery, page: u64) -> Result<JobPostingPage, ServerFnError> {
    backend::api::jobs::search_jobs(query, page).await.map_err(server_error)
}

#[server]
pub async fn recommend_jobs(user_id: String, filters: FilterParams) -> Result<JobPostingPage, ServerFnError> {
    backend::api::jobs::recommend_jobs(user_id, filters).await.map_err(server_error)
}

#[server]
pub async fn toggle_bookmark(posting_id: String) -> Result<BookmarkStatus, ServerFnError> {
    backend::api::jobs::toggle_bookmark(posting_id).await.map_err(server_error)
}

#[server]
pub async fn get_job_posting(posting_id: String) -> Result<JobPostingDetail, ServerFnError> {
    backend::api::job_postings::get_job_posting(posting_id).await.map_err(server_error)
}

#[server]
pub async fn save_job_posting(posting_id: Option<String>, draft: JobPostingDraft) -> Result<JobPostingDetail, ServerFnError> {
    let x = match posting_id {
        Some(posting_id) => backend::api::job_postings::update_job_posting(posting_id, draft).await,
        None => backend::api::job_postings::create_job_posting(draft).await,
    };
    x.map_err(server_error)
}

#[server]
pub async fn get_resume(resume_id: String) -> Result<ResumeDetail, ServerFnError> {
    backend::api::resumes::get_resume(resume_id).await.map_err(server_error)
}

#[server]
pub async fn save_resume(resume_id: Option<String>, draft: ResumeDraft) -> Result<ResumeDetail, ServerFnError> {
    let x = match resume_id {
        Some(resume_id) => backend::api::resumes::update_resume(resume_id, draft).await,
        None => backend::api::resumes::create_resume(draft).await,
    };
    x.map_err(server_error)
}
