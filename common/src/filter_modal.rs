//! Navigation state of the bottom filter modal.

use serde::{Deserialize, Serialize};

use crate::dimension::FilterDimension;
use crate::filter_state::FilterState;

/// Header title of the condition menu.
pub const CONDITION_MENU_TITLE: &str = "조건 추가";


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterModalView {
    Menu,
    Dimension {
        dimension: FilterDimension,
        /// Entered through the menu, so the back control leads there.
        from_menu: bool,
    },
}

impl FilterModalView {
    pub fn title(&self) -> &'static str {
        match self {
            FilterModalView::Menu => CONDITION_MENU_TITLE,
            FilterModalView::Dimension { dimension, .. } => dimension.title(),
        }
    }

    pub fn from_title(title: &str) -> Option<Self> {
        if title == CONDITION_MENU_TITLE {
            return Some(FilterModalView::Menu);
        }
        FilterDimension::from_title(title).map(|dimension| FilterModalView::Dimension { dimension, from_menu: false })
    }

    pub fn dimension(&self) -> Option<FilterDimension> {
        match self {
            FilterModalView::Menu => None,
            FilterModalView::Dimension { dimension, .. } => Some(*dimension),
        }
    }
}


/// `view == None` means the modal is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterModalState {
    pub view: Option<FilterModalView>,
}

impl FilterModalState {
    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    pub fn open_menu(&mut self) {
        self.view = Some(FilterModalView::Menu);
    }

    pub fn open_dimension(&mut self, dimension: FilterDimension) {
        self.view = Some(FilterModalView::Dimension { dimension, from_menu: false });
    }

    /// Opens by header title. Unknown titles leave the modal untouched.
    pub fn open_title(&mut self, title: &str) -> bool {
        match FilterModalView::from_title(title) {
            Some(view) => {
                self.view = Some(view);
                true
            }
            None => {
                tracing::warn!("no filter view titled {title:?}");
                false
            }
        }
    }

    /// Menu row tap. Only valid while the menu is shown.
    pub fn choose(&mut self, dimension: FilterDimension) -> bool {
        if self.view != Some(FilterModalView::Menu) {
            return false;
        }
        self.view = Some(FilterModalView::Dimension { dimension, from_menu: true });
        true
    }

    pub fn shows_back_control(&self) -> bool {
        matches!(self.view, Some(FilterModalView::Dimension { from_menu: true, .. }))
    }

    pub fn back(&mut self) -> bool {
        if !self.shows_back_control() {
            return false;
        }
        self.view = Some(FilterModalView::Menu);
        true
    }

    pub fn close(&mut self) {
        self.view = None;
    }

    pub fn title(&self) -> Option<&'static str> {
        self.view.map(|v| v.title())
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionMenuRow {
    pub dimension: FilterDimension,
    pub highlighted: bool,
}

pub fn condition_menu_rows(dimensions: &[FilterDimension], state: &FilterState) -> Vec<ConditionMenuRow> {
    dimensions
        .iter()
        .map(|dimension| ConditionMenuRow {
            dimension: *dimension,
            highlighted: state.has_selection(*dimension),
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn menu_path_allows_back_navigation() {
        let mut modal = FilterModalState::default();
        assert!(!modal.is_open());

        modal.open_menu();
        assert_eq!(modal.title(), Some("조건 추가"));
        assert!(!modal.shows_back_control());
        assert!(!modal.back());

        assert!(modal.choose(FilterDimension::Education));
        assert_eq!(modal.title(), Some("학력"));
        assert!(modal.shows_back_control());

        assert!(modal.back());
        assert_eq!(modal.view, Some(FilterModalView::Menu));

        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn direct_entry_has_no_back_control() {
        let mut modal = FilterModalState::default();
        modal.open_dimension(FilterDimension::Region);
        assert!(!modal.shows_back_control());
        assert!(!modal.back());
        assert!(!modal.choose(FilterDimension::Job));
        assert_eq!(modal.view.and_then(|v| v.dimension()), Some(FilterDimension::Region));
    }

    #[test]
    fn choose_requires_the_menu() {
        let mut modal = FilterModalState::default();
        assert!(!modal.choose(FilterDimension::Job));
        assert!(!modal.is_open());
    }

    #[test]
    fn opens_by_title() {
        let mut modal = FilterModalState::default();
        assert!(modal.open_title("조건 추가"));
        assert_eq!(modal.view, Some(FilterModalView::Menu));
        assert!(modal.open_title("맞춤조건"));
        assert_eq!(
            modal.view,
            Some(FilterModalView::Dimension { dimension: FilterDimension::Personalized, from_menu: false })
        );
        assert!(!modal.open_title("없는 제목"));
        assert_eq!(modal.title(), Some("맞춤조건"));
    }

    #[test]
    fn menu_rows_highlight_dimensions_with_picks() {
        let mut state = FilterState::default();
        state.toggle_sub_item(FilterDimension::Career, "신입");
        state.select_category(FilterDimension::Job, "IT개발");

        let rows = condition_menu_rows(&[FilterDimension::Job, FilterDimension::Career], &state);
        assert_eq!(rows, vec![
            ConditionMenuRow { dimension: FilterDimension::Job, highlighted: false },
            ConditionMenuRow { dimension: FilterDimension::Career, highlighted: true },
        ]);
    }
}
