//! Normalized filter parameters handed to the network layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dimension::FilterDimension;
use crate::filter_state::FilterState;
use crate::selector_state::SelectorState;
use crate::taxonomy_tables::{PERSONALIZED_TAXONOMY, personalized_param_key};


#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterParams {
    pub job: Vec<String>,
    pub region: Vec<String>,
    pub career: Vec<String>,
    pub education: Vec<String>,
    pub company_type: Vec<String>,
    pub employment_type: Vec<String>,
    /// Grouped by category key (`disabilityGrade`, `disabilityTypes`, ...).
    /// Categories without a match are absent rather than empty.
    pub personalized: BTreeMap<String, Vec<String>>,
}

impl FilterParams {
    /// Values of one of the six flat dimensions. Personalized is grouped and
    /// yields an empty slice here.
    pub fn flat(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Region => &self.region,
            FilterDimension::Job => &self.job,
            FilterDimension::Career => &self.career,
            FilterDimension::Education => &self.education,
            FilterDimension::CompanyType => &self.company_type,
            FilterDimension::EmploymentType => &self.employment_type,
            FilterDimension::Personalized => &[],
        }
    }

    fn flat_mut(&mut self, dimension: FilterDimension) -> Option<&mut Vec<String>> {
        match dimension {
            FilterDimension::Region => Some(&mut self.region),
            FilterDimension::Job => Some(&mut self.job),
            FilterDimension::Career => Some(&mut self.career),
            FilterDimension::Education => Some(&mut self.education),
            FilterDimension::CompanyType => Some(&mut self.company_type),
            FilterDimension::EmploymentType => Some(&mut self.employment_type),
            FilterDimension::Personalized => None,
        }
    }

    pub fn selection_count(&self) -> usize {
        FilterDimension::ALL.iter().map(|d| self.flat(*d).len()).sum::<usize>()
            + self.personalized.values().map(Vec::len).sum::<usize>()
    }
}


/// Selected values, or the active category when it was moved off the default
/// and nothing under it was picked.
fn flatten_dimension(dimension: FilterDimension, state: &SelectorState) -> Vec<String> {
    if state.has_selection() {
        return state.selected_sub_items.iter().cloned().collect();
    }
    if state.active_category != dimension.default_category() {
        return vec![state.active_category.clone()];
    }
    Vec::new()
}

fn regroup_personalized(state: &SelectorState) -> BTreeMap<String, Vec<String>> {
    let mut grouped = BTreeMap::new();
    for category in PERSONALIZED_TAXONOMY.categories() {
        let matched = category
            .sub_items
            .iter()
            .filter(|item| state.selected_sub_items.contains(**item))
            .map(|item| item.to_string())
            .collect::<Vec<_>>();
        if matched.is_empty() {
            continue;
        }
        let Some(key) = personalized_param_key(category.name) else {
            continue;
        };
        grouped.insert(key.to_string(), matched);
    }
    let dropped = state
        .selected_sub_items
        .iter()
        .filter(|value| !PERSONALIZED_TAXONOMY.contains_sub_item(value))
        .count();
    if dropped > 0 {
        tracing::debug!("dropped {dropped} personalized values not present in the taxonomy");
    }
    grouped
}

pub fn build_filter_params(state: &FilterState) -> FilterParams {
    let mut params = FilterParams::default();
    for dimension in FilterDimension::ALL {
        if let Some(slot) = params.flat_mut(dimension) {
            *slot = flatten_dimension(dimension, state.get(dimension));
        }
    }
    params.personalized = regroup_personalized(&state.personalized);
    params
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn changed_category_without_pick_is_kept() {
        let mut state = FilterState::default();
        state.select_category(FilterDimension::Job, "IT개발");
        assert_eq!(state.build_params().job, vec!["IT개발".to_string()]);

        state.select_category(FilterDimension::Job, "식음료외식");
        assert_eq!(state.build_params().job, Vec::<String>::new());
    }

    #[test]
    fn picks_win_over_the_active_category() {
        let mut state = FilterState::default();
        state.select_category(FilterDimension::Career, "경력");
        state.toggle_sub_item(FilterDimension::Career, "3년 이상");
        state.toggle_sub_item(FilterDimension::Career, "5년 이상");
        assert_eq!(state.build_params().career, vec!["3년 이상".to_string(), "5년 이상".to_string()]);
    }

    #[test]
    fn region_whole_pick_is_sent_as_region_name() {
        let mut state = FilterState::default();
        state.select_category(FilterDimension::Region, "서울");
        state.toggle_sub_item(FilterDimension::Region, "전체");
        state.select_category(FilterDimension::Region, "경기");
        state.toggle_sub_item(FilterDimension::Region, "성남시");
        assert_eq!(state.build_params().region, vec!["서울".to_string(), "성남시".to_string()]);
    }

    #[test]
    fn personalized_groups_only_matching_categories() {
        let mut state = FilterState::default();
        state.toggle_sub_item(FilterDimension::Personalized, "심한 장애");
        state.select_category(FilterDimension::Personalized, "장애 유형");
        state.toggle_sub_item(FilterDimension::Personalized, "지체 장애");

        let params = state.build_params();
        let expected = BTreeMap::from([
            ("disabilityGrade".to_string(), vec!["심한 장애".to_string()]),
            ("disabilityTypes".to_string(), vec!["지체 장애".to_string()]),
        ]);
        assert_eq!(params.personalized, expected);
    }

    #[test]
    fn personalized_drops_values_missing_from_the_taxonomy() {
        let mut state = FilterState::default();
        state.personalized.selected_sub_items.insert("예전 조건".to_string());
        state.personalized.selected_sub_items.insert("휠체어".to_string());
        let params = state.build_params();
        assert_eq!(params.personalized.len(), 1);
        assert_eq!(params.personalized["assistiveDevices"], vec!["휠체어".to_string()]);
    }

    #[test]
    fn personalized_keeps_taxonomy_order_inside_a_group() {
        let mut state = FilterState::default();
        state.select_category(FilterDimension::Personalized, "선호 근무형태");
        state.toggle_sub_item(FilterDimension::Personalized, "전일근무");
        state.toggle_sub_item(FilterDimension::Personalized, "재택근무");
        assert_eq!(
            state.build_params().personalized["preferredWorkType"],
            vec!["재택근무".to_string(), "전일근무".to_string()]
        );
    }

    #[test]
    fn builder_does_not_touch_its_input() {
        let mut state = FilterState::default();
        state.select_category(FilterDimension::Education, "대졸");
        let before = state.clone();
        let _ = build_filter_params(&state);
        assert_eq!(state, before);
    }

    #[test]
    fn serializes_with_backend_field_names() {
        let mut state = FilterState::default();
        state.select_category(FilterDimension::CompanyType, "공공기관");
        state.toggle_sub_item(FilterDimension::EmploymentType, "정규직");
        state.toggle_sub_item(FilterDimension::Personalized, "심하지 않은 장애");

        let json = serde_json::to_value(state.build_params()).unwrap();
        assert_eq!(json, serde_json::json!({
            "job": [],
            "region": [],
            "career": [],
            "education": [],
            "companyType": ["공공기관"],
            "employmentType": ["정규직"],
            "personalized": { "disabilityGrade": ["심하지 않은 장애"] },
        }));
    }

    #[test]
    fn counts_every_value() {
        let params = FilterParams {
            job: vec!["웹개발".to_string()],
            personalized: BTreeMap::from([("jobInterest".to_string(), vec!["IT직".to_string(), "사무직".to_string()])]),
            ..Default::default()
        };
        assert_eq!(params.selection_count(), 3);
        assert_eq!(FilterParams::default().selection_count(), 0);
    }
}
