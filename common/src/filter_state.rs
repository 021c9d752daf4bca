//! Filter-state controller: one selector state per dimension.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dimension::FilterDimension;
use crate::filter_params::{FilterParams, build_filter_params};
use crate::selector_state::SelectorState;
use crate::taxonomy::SubItemRule;
use crate::taxonomy_tables::personalized_category_for_key;


/// The full set of selections a screen owns. Every consumer screen holds one
/// of these and hands it to the modal host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub region: SelectorState,
    pub job: SelectorState,
    pub career: SelectorState,
    pub education: SelectorState,
    pub company_type: SelectorState,
    pub employment_type: SelectorState,
    pub personalized: SelectorState,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            region: SelectorState::for_dimension(FilterDimension::Region),
            job: SelectorState::for_dimension(FilterDimension::Job),
            career: SelectorState::for_dimension(FilterDimension::Career),
            education: SelectorState::for_dimension(FilterDimension::Education),
            company_type: SelectorState::for_dimension(FilterDimension::CompanyType),
            employment_type: SelectorState::for_dimension(FilterDimension::EmploymentType),
            personalized: SelectorState::for_dimension(FilterDimension::Personalized),
        }
    }
}

impl FilterState {
    pub fn get(&self, dimension: FilterDimension) -> &SelectorState {
        match dimension {
            FilterDimension::Region => &self.region,
            FilterDimension::Job => &self.job,
            FilterDimension::Career => &self.career,
            FilterDimension::Education => &self.education,
            FilterDimension::CompanyType => &self.company_type,
            FilterDimension::EmploymentType => &self.employment_type,
            FilterDimension::Personalized => &self.personalized,
        }
    }

    pub fn get_mut(&mut self, dimension: FilterDimension) -> &mut SelectorState {
        match dimension {
            FilterDimension::Region => &mut self.region,
            FilterDimension::Job => &mut self.job,
            FilterDimension::Career => &mut self.career,
            FilterDimension::Education => &mut self.education,
            FilterDimension::CompanyType => &mut self.company_type,
            FilterDimension::EmploymentType => &mut self.employment_type,
            FilterDimension::Personalized => &mut self.personalized,
        }
    }

    pub fn select_category(&mut self, dimension: FilterDimension, category: &str) {
        self.get_mut(dimension).select_category(category);
    }

    pub fn toggle_sub_item(&mut self, dimension: FilterDimension, sub_item: &str) -> bool {
        self.get_mut(dimension).toggle_sub_item(dimension.sub_item_rule(), sub_item)
    }

    pub fn remove_chip(&mut self, dimension: FilterDimension, value: &str) -> bool {
        self.get_mut(dimension).remove_chip(value)
    }

    pub fn has_selection(&self, dimension: FilterDimension) -> bool {
        self.get(dimension).has_selection()
    }

    pub fn reset_dimension(&mut self, dimension: FilterDimension) {
        self.get_mut(dimension).reset(dimension);
    }

    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    pub fn build_params(&self) -> FilterParams {
        build_filter_params(self)
    }

    /// Rebuilds selector state from conditions saved on a posting or resume.
    ///
    /// Values are taken as-is. A bare category name (what the builder sends
    /// for a category chosen without picks) only moves the active category,
    /// unless the dimension stores whole-category picks under that name. The
    /// active category otherwise becomes the first category that holds one of
    /// the values, or the dimension default.
    pub fn from_params(params: &FilterParams) -> Self {
        let mut state = Self::default();
        for dimension in FilterDimension::ALL {
            let values: Vec<String> = match dimension {
                FilterDimension::Personalized => params
                    .personalized
                    .iter()
                    .filter(|(key, _)| personalized_category_for_key(key).is_some())
                    .flat_map(|(_, values)| values.iter().cloned())
                    .collect(),
                _ => params.flat(dimension).to_vec(),
            };
            let taxonomy = dimension.taxonomy();
            let stores_category_names = matches!(dimension.sub_item_rule(), SubItemRule::WholeCategoryAlias(_));

            let mut active = None;
            let mut selected = BTreeSet::new();
            for value in values {
                let category = taxonomy.category_names().find(|name| *name == value);
                if category.is_some() && !stores_category_names && !taxonomy.contains_sub_item(&value) {
                    active = active.or(category);
                    continue;
                }
                if active.is_none() {
                    active = category.or_else(|| taxonomy.categories_containing(&value).next());
                }
                selected.insert(value);
            }

            let selector = state.get_mut(dimension);
            selector.active_category = active.unwrap_or(dimension.default_category()).to_string();
            selector.selected_sub_items = selected;
        }
        state
    }
}
