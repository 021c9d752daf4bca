//! Per-dimension selection state and the generic two-level selector model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dimension::FilterDimension;
use crate::taxonomy::SubItemRule;


/// `active_category` only decides which sub-item list is on screen;
/// `selected_sub_items` accumulates picks across every category visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorState {
    pub active_category: String,
    #[serde(default)]
    pub selected_sub_items: BTreeSet<String>,
}

impl SelectorState {
    pub fn new(active_category: impl Into<String>) -> Self {
        Self {
            active_category: active_category.into(),
            selected_sub_items: BTreeSet::new(),
        }
    }

    pub fn for_dimension(dimension: FilterDimension) -> Self {
        Self::new(dimension.default_category())
    }

    pub fn select_category(&mut self, category: &str) {
        self.active_category = category.to_string();
    }

    /// Flips membership of the tapped sub-item. Returns whether it is selected
    /// afterwards.
    pub fn toggle_sub_item(&mut self, rule: SubItemRule, sub_item: &str) -> bool {
        let value = rule.stored_value(&self.active_category, sub_item);
        if self.selected_sub_items.remove(&value) {
            false
        } else {
            self.selected_sub_items.insert(value);
            true
        }
    }

    pub fn is_sub_item_selected(&self, rule: SubItemRule, sub_item: &str) -> bool {
        self.selected_sub_items.contains(&rule.stored_value(&self.active_category, sub_item))
    }

    /// Chip close control.
    pub fn remove_chip(&mut self, value: &str) -> bool {
        self.selected_sub_items.remove(value)
    }

    pub fn chips(&self) -> impl Iterator<Item = &str> {
        self.selected_sub_items.iter().map(|s| s.as_str())
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_sub_items.is_empty()
    }

    pub fn reset(&mut self, dimension: FilterDimension) {
        *self = Self::for_dimension(dimension);
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub name: &'static str,
    pub is_active: bool,
    /// At least one selected value belongs to this category.
    pub has_selection: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubItemRow {
    pub label: &'static str,
    pub stored_value: String,
    pub is_selected: bool,
}

/// Read-only view of one dimension's selector, shared by every dimension.
#[derive(Debug, Clone, Copy)]
pub struct SelectorView<'a> {
    pub dimension: FilterDimension,
    pub state: &'a SelectorState,
}

impl<'a> SelectorView<'a> {
    pub fn new(dimension: FilterDimension, state: &'a SelectorState) -> Self {
        Self { dimension, state }
    }

    pub fn category_rows(&self) -> Vec<CategoryRow> {
        let rule = self.dimension.sub_item_rule();
        self.dimension
            .taxonomy()
            .categories()
            .iter()
            .map(|category| CategoryRow {
                name: category.name,
                is_active: category.name == self.state.active_category,
                has_selection: category
                    .sub_items
                    .iter()
                    .any(|item| self.state.selected_sub_items.contains(&rule.stored_value(category.name, item))),
            })
            .collect()
    }

    /// Sub-items of the active category. Empty when the active category is not
    /// in the taxonomy (e.g. restored from stale storage).
    pub fn sub_item_rows(&self) -> Vec<SubItemRow> {
        let rule = self.dimension.sub_item_rule();
        let active = self.state.active_category.as_str();
        self.dimension
            .taxonomy()
            .sub_items(active)
            .unwrap_or(&[])
            .iter()
            .copied()
            .map(|label| {
                let stored_value = rule.stored_value(active, label);
                let is_selected = self.state.selected_sub_items.contains(&stored_value);
                SubItemRow { label, stored_value, is_selected }
            })
            .collect()
    }

    pub fn chips(&self) -> Vec<String> {
        self.state.chips().map(str::to_string).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn selected(state: &SelectorState) -> Vec<&str> {
        state.chips().collect()
    }

    #[test]
    fn selecting_a_category_keeps_the_selection() {
        let mut state = SelectorState::for_dimension(FilterDimension::Job);
        state.toggle_sub_item(SubItemRule::Plain, "조리사");
        state.select_category("IT개발");
        assert_eq!(state.active_category, "IT개발");
        assert_eq!(selected(&state), vec!["조리사"]);
    }

    #[test]
    fn toggling_twice_restores_the_set() {
        for dimension in FilterDimension::ALL {
            let rule = dimension.sub_item_rule();
            let taxonomy = dimension.taxonomy();
            let mut state = SelectorState::for_dimension(dimension);
            state.toggle_sub_item(rule, taxonomy.categories()[0].sub_items[0]);

            for category in taxonomy.categories() {
                state.select_category(category.name);
                for item in category.sub_items {
                    let before = state.clone();
                    let now_selected = state.toggle_sub_item(rule, item);
                    assert_eq!(now_selected, !before.is_sub_item_selected(rule, item));
                    state.toggle_sub_item(rule, item);
                    assert_eq!(state, before, "{dimension}: {item}");
                }
            }
        }
    }

    #[test]
    fn region_all_stores_the_region_name() {
        let dimension = FilterDimension::Region;
        let rule = dimension.sub_item_rule();
        let mut state = SelectorState::for_dimension(dimension);
        state.select_category("서울");

        assert!(state.toggle_sub_item(rule, "전체"));
        assert_eq!(selected(&state), vec!["서울"]);
        assert!(state.is_sub_item_selected(rule, "전체"));

        assert!(state.remove_chip("서울"));
        assert!(state.chips().next().is_none());
        assert!(!state.is_sub_item_selected(rule, "전체"));

        state.toggle_sub_item(rule, "전체");
        state.toggle_sub_item(rule, "전체");
        assert!(!state.has_selection());
    }

    #[test]
    fn selections_span_categories() {
        let rule = FilterDimension::Region.sub_item_rule();
        let mut state = SelectorState::for_dimension(FilterDimension::Region);
        state.select_category("서울");
        state.toggle_sub_item(rule, "강남구");
        state.select_category("부산");
        state.toggle_sub_item(rule, "전체");
        state.toggle_sub_item(rule, "해운대구");
        assert_eq!(selected(&state), vec!["강남구", "부산", "해운대구"]);
    }

    #[test]
    fn chips_mirror_state_after_mixed_operations() {
        let rule = SubItemRule::Plain;
        let mut state = SelectorState::for_dimension(FilterDimension::Personalized);
        let ops: &[(&str, &str)] = &[
            ("toggle", "심한 장애"),
            ("toggle", "심한 장애"),
            ("toggle", "심하지 않은 장애"),
            ("remove", "심하지 않은 장애"),
            ("remove", "없는 값"),
            ("toggle", "심한 장애"),
        ];
        let mut expected = BTreeSet::new();
        for (op, value) in ops {
            match *op {
                "toggle" => {
                    if !expected.remove(*value) {
                        expected.insert(value.to_string());
                    }
                    state.toggle_sub_item(rule, value);
                }
                _ => {
                    expected.remove(*value);
                    state.remove_chip(value);
                }
            }
            let view = SelectorView::new(FilterDimension::Personalized, &state);
            assert_eq!(view.chips(), expected.iter().cloned().collect::<Vec<_>>());
        }
    }

    #[test]
    fn view_rows_follow_active_category() {
        let dimension = FilterDimension::Region;
        let mut state = SelectorState::for_dimension(dimension);
        state.select_category("세종");
        state.toggle_sub_item(dimension.sub_item_rule(), "전체");
        state.select_category("제주");

        let view = SelectorView::new(dimension, &state);
        let rows = view.category_rows();
        let sejong = rows.iter().find(|r| r.name == "세종").unwrap();
        assert!(sejong.has_selection);
        assert!(!sejong.is_active);
        assert!(rows.iter().find(|r| r.name == "제주").unwrap().is_active);

        let labels = view.sub_item_rows().into_iter().map(|r| (r.label, r.stored_value, r.is_selected)).collect::<Vec<_>>();
        assert_eq!(labels, vec![
            ("전체", "제주".to_string(), false),
            ("서귀포시", "서귀포시".to_string(), false),
            ("제주시", "제주시".to_string(), false),
        ]);
    }

    #[test]
    fn unknown_active_category_has_no_sub_items() {
        let state = SelectorState::new("사라진 카테고리");
        assert!(SelectorView::new(FilterDimension::Job, &state).sub_item_rows().is_empty());
    }

    #[test]
    fn district_names_shared_between_regions_are_one_value() {
        let dimension = FilterDimension::Region;
        let rule = dimension.sub_item_rule();
        let mut state = SelectorState::for_dimension(dimension);
        state.select_category("서울");
        state.toggle_sub_item(rule, "중구");
        state.select_category("대구");

        let view = SelectorView::new(dimension, &state);
        let highlighted = view
            .category_rows()
            .into_iter()
            .filter(|row| row.has_selection)
            .map(|row| row.name)
            .collect::<Vec<_>>();
        assert_eq!(highlighted, vec!["서울", "인천", "대구", "대전", "울산"]);
        assert!(view.sub_item_rows().iter().any(|row| row.label == "중구" && row.is_selected));
        assert_eq!(view.chips(), vec!["중구".to_string()]);
    }
}
