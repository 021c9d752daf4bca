//! Job posting create / edit endpoints.

use common::job_posting::{JobPostingDetail, JobPostingDraft};

use crate::http_utils::rest_client::{api_get_json, api_post_json, api_put_json};


fn ensure_complete(draft: &JobPostingDraft) -> anyhow::Result<()> {
    let missing = draft.missing_fields();
    if !missing.is_empty() {
        anyhow::bail!("missing required fields: {}", missing.join(", "));
    }
    Ok(())
}

pub async fn get_job_posting(posting_id: String) -> anyhow::Result<JobPostingDetail> {
    api_get_json(&["job-postings", posting_id.as_str()]).await
}

pub async fn create_job_posting(draft: JobPostingDraft) -> anyhow::Result<JobPostingDetail> {
    ensure_complete(&draft)?;
    api_post_json(&["job-postings"], &draft).await
}

pub async fn update_job_posting(posting_id: String, draft: JobPostingDraft) -> anyhow::Result<JobPostingDetail> {
    ensure_complete(&draft)?;
    api_put_json(&["job-postings", posting_id.as_str()], &draft).await
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn incomplete_draft_is_rejected_before_any_request() {
        let err = create_job_posting(JobPostingDraft::default()).await.unwrap_err();
        assert!(err.to_string().contains("공고 제목"), "{err}");
    }
}
