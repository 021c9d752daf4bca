//! Resume models exchanged with the job-board API.

use serde::{Deserialize, Serialize};

use crate::dimension::FilterDimension;
use crate::filter_params::FilterParams;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDraft {
    pub title: String,
    pub introduction: String,
    /// Desired conditions. Company type is never sent for resumes.
    pub conditions: FilterParams,
}

impl ResumeDraft {
    pub fn new(title: String, introduction: String, mut conditions: FilterParams) -> Self {
        conditions.company_type.clear();
        Self { title, introduction, conditions }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("이력서 제목");
        }
        if self.conditions.flat(FilterDimension::Job).is_empty() {
            missing.push(FilterDimension::Job.title());
        }
        missing
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDetail {
    pub id: String,
    #[serde(flatten)]
    pub draft: ResumeDraft,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_type_is_stripped() {
        let conditions = FilterParams {
            company_type: vec!["공기업".to_string()],
            job: vec!["웹개발".to_string()],
            ..Default::default()
        };
        let draft = ResumeDraft::new("첫 이력서".to_string(), String::new(), conditions);
        assert!(draft.conditions.company_type.is_empty());
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn job_is_required() {
        let draft = ResumeDraft { title: "이력서".to_string(), ..Default::default() };
        assert_eq!(draft.missing_fields(), vec!["직종"]);
    }
}
