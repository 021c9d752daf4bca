//! Job posting models exchanged with the job-board API.

use serde::{Deserialize, Serialize};

use crate::filter_params::FilterParams;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingSummary {
    pub id: String,
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub bookmarked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingPage {
    pub postings: Vec<JobPostingSummary>,
    pub page: u64,
    #[serde(default)]
    pub has_next: bool,
}

/// Editable part of a posting. `conditions` is the built filter parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct JobPostingDraft {
    pub title: String,
    pub company_name: String,
    pub description: String,
    pub conditions: FilterParams,
}

impl JobPostingDraft {
    /// Human-readable reasons the draft cannot be submitted yet.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("공고 제목");
        }
        if self.company_name.trim().is_empty() {
            missing.push("기업명");
        }
        missing
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingDetail {
    pub id: String,
    #[serde(flatten)]
    pub draft: JobPostingDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkStatus {
    pub bookmarked: bool,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_reads_flat_json_with_missing_conditions() {
        let detail: JobPostingDetail = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "title": "매장 관리",
            "companyName": "한빛카페",
        }))
        .unwrap();
        assert_eq!(detail.draft.title, "매장 관리");
        assert_eq!(detail.draft.conditions, FilterParams::default());
        assert_eq!(detail.draft.missing_fields(), Vec::<&str>::new());
    }

    #[test]
    fn blank_draft_reports_required_fields() {
        let draft = JobPostingDraft { title: "  ".to_string(), ..Default::default() };
        assert_eq!(draft.missing_fields(), vec!["공고 제목", "기업명"]);
    }
}
