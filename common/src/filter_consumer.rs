//! Screens that own a filter state, and what each one offers and resets.

use serde::{Deserialize, Serialize};

use crate::dimension::FilterDimension;
use crate::filter_modal::FilterModalView;
use crate::filter_state::FilterState;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterConsumer {
    JobSearch,
    JobRecommend,
    JobPostingEditor,
    ResumeEditor,
}

const ALL_DIMENSIONS: &[FilterDimension] = &FilterDimension::ALL;

// resumes have no company type
const RESUME_DIMENSIONS: &[FilterDimension] = &[
    FilterDimension::Region,
    FilterDimension::Job,
    FilterDimension::Career,
    FilterDimension::Education,
    FilterDimension::EmploymentType,
    FilterDimension::Personalized,
];

const RECOMMEND_DIMENSIONS: &[FilterDimension] = &[
    FilterDimension::Region,
    FilterDimension::Job,
    FilterDimension::EmploymentType,
    FilterDimension::Personalized,
];

impl FilterConsumer {
    pub fn dimensions(&self) -> &'static [FilterDimension] {
        match self {
            FilterConsumer::JobSearch => ALL_DIMENSIONS,
            FilterConsumer::JobRecommend => RECOMMEND_DIMENSIONS,
            FilterConsumer::JobPostingEditor => ALL_DIMENSIONS,
            FilterConsumer::ResumeEditor => RESUME_DIMENSIONS,
        }
    }

    /// Rows listed by the condition menu. The personalized dimension has its
    /// own entry point on every screen, so it is left out here.
    pub fn menu_dimensions(&self) -> Vec<FilterDimension> {
        self.dimensions()
            .iter()
            .copied()
            .filter(|d| *d != FilterDimension::Personalized)
            .collect()
    }

    pub fn offers(&self, dimension: FilterDimension) -> bool {
        self.dimensions().contains(&dimension)
    }

    /// Local storage namespace for this screen's cached selections.
    pub fn storage_namespace(&self) -> &'static str {
        match self {
            FilterConsumer::JobSearch => "jobSearchFilters",
            FilterConsumer::JobRecommend => "jobRecommendFilters",
            FilterConsumer::JobPostingEditor => "jobPostingFilters",
            FilterConsumer::ResumeEditor => "resumeFilters",
        }
    }

    /// Reset button. From the menu (or with nothing open) every offered
    /// dimension is cleared; from a dimension view only that dimension, and
    /// only if this screen offers it.
    pub fn reset(&self, state: &mut FilterState, view: Option<&FilterModalView>) {
        match view.and_then(|v| v.dimension()) {
            Some(dimension) => {
                if self.offers(dimension) {
                    tracing::info!("{self:?}: reset {dimension}");
                    state.reset_dimension(dimension);
                } else {
                    tracing::debug!("{self:?}: {dimension} is not offered here, nothing to reset");
                }
            }
            None => {
                tracing::info!("{self:?}: reset all conditions");
                for dimension in self.dimensions() {
                    state.reset_dimension(*dimension);
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn busy_state() -> FilterState {
        let mut state = FilterState::default();
        for dimension in FilterDimension::ALL {
            let taxonomy = dimension.taxonomy();
            let category = taxonomy.categories().last().unwrap();
            state.select_category(dimension, category.name);
            state.toggle_sub_item(dimension, category.sub_items[0]);
        }
        state
    }

    #[test]
    fn resume_editor_never_offers_company_type() {
        assert!(!FilterConsumer::ResumeEditor.offers(FilterDimension::CompanyType));
        assert!(!FilterConsumer::ResumeEditor.menu_dimensions().contains(&FilterDimension::CompanyType));
        assert!(FilterConsumer::JobPostingEditor.offers(FilterDimension::CompanyType));
    }

    #[test]
    fn dimension_reset_touches_one_dimension() {
        let mut state = busy_state();
        let view = FilterModalView::Dimension { dimension: FilterDimension::CompanyType, from_menu: true };
        FilterConsumer::JobPostingEditor.reset(&mut state, Some(&view));

        let expected = {
            let mut s = busy_state();
            s.reset_dimension(FilterDimension::CompanyType);
            s
        };
        assert_eq!(state, expected);
    }

    #[test]
    fn resume_editor_ignores_company_type_reset() {
        let mut state = busy_state();
        let view = FilterModalView::Dimension { dimension: FilterDimension::CompanyType, from_menu: false };
        FilterConsumer::ResumeEditor.reset(&mut state, Some(&view));
        assert_eq!(state, busy_state());
    }

    #[test]
    fn menu_reset_clears_only_offered_dimensions() {
        let mut state = busy_state();
        FilterConsumer::ResumeEditor.reset(&mut state, Some(&FilterModalView::Menu));
        for dimension in FilterDimension::ALL {
            assert_eq!(state.has_selection(dimension), dimension == FilterDimension::CompanyType, "{dimension}");
        }

        let mut state = busy_state();
        FilterConsumer::JobSearch.reset(&mut state, None);
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn namespaces_are_distinct() {
        let all = [
            FilterConsumer::JobSearch,
            FilterConsumer::JobRecommend,
            FilterConsumer::JobPostingEditor,
            FilterConsumer::ResumeEditor,
        ];
        let namespaces = all.iter().map(|c| c.storage_namespace()).collect::<std::collections::BTreeSet<_>>();
        assert_eq!(namespaces.len(), all.len());
    }
}
