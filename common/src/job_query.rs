//! Shared job search query models.

use serde::{Deserialize, Serialize};

use crate::filter_params::FilterParams;
use crate::filter_state::FilterState;

pub const JOB_LIST_PAGE_SIZE: u64 = 20;


/// What the job search screen carries in its route: the typed keyword and the
/// unbuilt selector states, so returning to the screen restores the modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobSearchQuery {
    pub keyword: String,
    pub filters: FilterState,
}

/// Request body sent to the job search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchRequest {
    pub keyword: String,
    #[serde(flatten)]
    pub filters: FilterParams,
    pub page: u64,
    pub page_size: u64,
}

impl JobSearchQuery {
    pub fn to_request(&self, page: u64) -> JobSearchRequest {
        JobSearchRequest {
            keyword: self.keyword.trim().to_string(),
            filters: self.filters.build_params(),
            page,
            page_size: JOB_LIST_PAGE_SIZE,
        }
    }

    /// A query arriving without conditions (home page box, tab bar) takes the
    /// screen's cached conditions, so the search runs with what the filter
    /// strip shows. `None` when the query already carries conditions or
    /// there is nothing cached.
    pub fn seeded_with(&self, cached: &FilterState) -> Option<JobSearchQuery> {
        let defaults = FilterState::default();
        if self.filters != defaults || *cached == defaults {
            return None;
        }
        Some(JobSearchQuery { keyword: self.keyword.clone(), filters: cached.clone() })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::FilterDimension;
    use crate::persisted_filters::{MemoryStore, load_filters, save_filters};

    #[test]
    fn request_flattens_built_filters() {
        let mut query = JobSearchQuery { keyword: "  바리스타 ".to_string(), ..Default::default() };
        query.filters.select_category(FilterDimension::Region, "제주");
        let json = serde_json::to_value(query.to_request(2)).unwrap();
        assert_eq!(json["keyword"], "바리스타");
        assert_eq!(json["region"], serde_json::json!(["제주"]));
        assert_eq!(json["page"], 2);
        assert_eq!(json["pageSize"], JOB_LIST_PAGE_SIZE);
        assert!(json.get("filters").is_none());
    }

    #[test]
    fn bare_query_searches_with_cached_conditions() {
        let store = MemoryStore::default();
        let mut cached = FilterState::default();
        cached.select_category(FilterDimension::Region, "서울");
        cached.toggle_sub_item(FilterDimension::Region, "전체");
        save_filters(&store, "u1", "jobSearchFilters", &cached).unwrap();

        let from_home = JobSearchQuery { keyword: "바리스타".to_string(), ..Default::default() };
        let restored = load_filters(&store, "u1", "jobSearchFilters");
        let seeded = from_home.seeded_with(&restored).unwrap();

        let request = seeded.to_request(0);
        assert_eq!(request.keyword, "바리스타");
        assert_eq!(request.filters, cached.build_params());
        assert_eq!(request.filters.region, vec!["서울".to_string()]);
    }

    #[test]
    fn conditions_in_the_query_are_not_overridden() {
        let mut cached = FilterState::default();
        cached.toggle_sub_item(FilterDimension::Job, "조리사");
        assert_eq!(JobSearchQuery::default().seeded_with(&FilterState::default()), None);

        let mut query = JobSearchQuery::default();
        query.filters.select_category(FilterDimension::Career, "경력");
        assert_eq!(query.seeded_with(&cached), None);
    }
}
