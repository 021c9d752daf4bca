//! Per-screen filter state shared with the filter modal components.

use dioxus::prelude::*;
use dioxus::logger::tracing::{info, warn};

use common::{
    dimension::FilterDimension,
    filter_consumer::FilterConsumer,
    filter_modal::FilterModalState,
    filter_state::FilterState,
    persisted_filters::{clear_filters, load_filters, save_filters},
};

use crate::data_definitions::{current_user::use_current_user, local_storage::device_store};


/// Provided as context by [`use_filter_controller`]; the button strip and modal
/// host read it from there.
#[derive(Clone, Copy, PartialEq)]
pub struct FilterController {
    pub consumer: FilterConsumer,
    pub filters: Signal<FilterState>,
    pub modal: Signal<FilterModalState>,
    user_id: ReadSignal<String>,
    persist: bool,
    on_apply: Callback<FilterState>,
}

impl FilterController {
    pub fn open_menu(mut self) {
        self.modal.write().open_menu();
    }

    pub fn open_dimension(mut self, dimension: FilterDimension) {
        self.modal.write().open_dimension(dimension);
    }

    pub fn choose(mut self, dimension: FilterDimension) {
        self.modal.write().choose(dimension);
    }

    pub fn back(mut self) {
        self.modal.write().back();
    }

    pub fn close(mut self) {
        self.modal.write().close();
    }

    pub fn select_category(mut self, dimension: FilterDimension, category: &str) {
        self.filters.write().select_category(dimension, category);
    }

    pub fn toggle_sub_item(mut self, dimension: FilterDimension, sub_item: &str) {
        self.filters.write().toggle_sub_item(dimension, sub_item);
    }

    pub fn remove_chip(mut self, dimension: FilterDimension, value: &str) {
        self.filters.write().remove_chip(dimension, value);
    }

    pub fn reset(mut self) {
        let view = self.modal.peek().view;
        self.consumer.reset(&mut self.filters.write(), view.as_ref());
    }

    /// Closes the modal, caches the selector states and hands them to the
    /// screen, which builds its request parameters from them.
    pub fn apply(mut self) {
        self.modal.write().close();
        let state = self.filters.peek().clone();
        if self.persist {
            let user_id = self.user_id.peek().clone();
            if let Err(e) = save_filters(device_store(), &user_id, self.consumer.storage_namespace(), &state) {
                warn!("could not cache {:?} filters: {e}", self.consumer);
            }
        }
        info!(
            "{:?}: applying {} conditions",
            self.consumer,
            FilterDimension::ALL.iter().map(|d| state.get(*d).selected_sub_items.len()).sum::<usize>()
        );
        self.on_apply.call(state);
    }

    /// Drops this screen's cached selections, e.g. once a new draft has been
    /// submitted with them.
    pub fn clear_cache(self) {
        let user_id = self.user_id.peek().clone();
        if let Err(e) = clear_filters(device_store(), &user_id, self.consumer.storage_namespace()) {
            warn!("could not clear cached {:?} filters: {e}", self.consumer);
        }
    }
}


/// `initial` wins over the device cache (e.g. conditions of a saved posting).
/// With `persist` the state is written back to the cache on every apply.
pub fn use_filter_controller(
    consumer: FilterConsumer,
    initial: Option<FilterState>,
    persist: bool,
    on_apply: Callback<FilterState>,
) -> FilterController {
    let current_user = use_current_user();
    let filters = use_signal(move || match initial {
        Some(state) => state,
        None => load_filters(device_store(), &current_user.id(), consumer.storage_namespace()),
    });
    let modal = use_signal(FilterModalState::default);
    use_context_provider(move || FilterController {
        consumer,
        filters,
        modal,
        user_id: current_user.user_id.into(),
        persist,
        on_apply,
    })
}
