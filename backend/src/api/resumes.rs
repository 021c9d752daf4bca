//! Resume create / edit endpoints.

use common::resume::{ResumeDetail, ResumeDraft};

use crate::http_utils::rest_client::{api_get_json, api_post_json, api_put_json};


/// Strips company type and checks required fields, for create and update alike.
fn prepare(draft: ResumeDraft) -> anyhow::Result<ResumeDraft> {
    let draft = ResumeDraft::new(draft.title, draft.introduction, draft.conditions);
    let missing = draft.missing_fields();
    if !missing.is_empty() {
        anyhow::bail!("missing required fields: {}", missing.join(", "));
    }
    Ok(draft)
}

pub async fn get_resume(resume_id: String) -> anyhow::Result<ResumeDetail> {
    api_get_json(&["resumes", resume_id.as_str()]).await
}

pub async fn create_resume(draft: ResumeDraft) -> anyhow::Result<ResumeDetail> {
    let draft = prepare(draft)?;
    api_post_json(&["resumes"], &draft).await
}

pub async fn update_resume(resume_id: String, draft: ResumeDraft) -> anyhow::Result<ResumeDetail> {
    let draft = prepare(draft)?;
    api_put_json(&["resumes", resume_id.as_str()], &draft).await
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn incomplete_update_is_rejected_before_any_request() {
        let err = update_resume("r1".to_string(), ResumeDraft::default()).await.unwrap_err();
        assert!(err.to_string().contains("이력서 제목"), "{err}");
    }

    #[tokio::test]
    async fn traversal_id_is_rejected_before_any_request() {
        let mut draft = ResumeDraft::default();
        draft.title = "바리스타 지원".to_string();
        draft.conditions.job = vec!["바리스타".to_string()];
        let err = update_resume("..".to_string(), draft).await.unwrap_err();
        assert!(err.to_string().contains("invalid path segment"), "{err}");
    }
}
