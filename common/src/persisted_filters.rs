//! Device-local caching of selector states, keyed by user and screen.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dimension::FilterDimension;
use crate::filter_state::FilterState;


#[derive(Debug, Error)]
pub enum FilterStoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("failed to encode stored filters: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value storage (browser local storage, device preferences, ...).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, FilterStoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), FilterStoreError>;
    fn remove_item(&self, key: &str) -> Result<(), FilterStoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<BTreeMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, FilterStoreError> {
        let items = self.items.lock().map_err(|e| FilterStoreError::Backend(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FilterStoreError> {
        let mut items = self.items.lock().map_err(|e| FilterStoreError::Backend(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), FilterStoreError> {
        let mut items = self.items.lock().map_err(|e| FilterStoreError::Backend(e.to_string()))?;
        items.remove(key);
        Ok(())
    }
}


pub fn filter_storage_key(user_id: &str, namespace: &str) -> String {
    format!("{user_id}_{namespace}")
}


/// Stored form of a [`FilterState`]. Every field may be missing, in which case
/// the dimension default is used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredFilters {
    pub selected_region: Option<String>,
    pub selected_sub_region: Option<BTreeSet<String>>,
    pub selected_job: Option<String>,
    pub selected_sub_job: Option<BTreeSet<String>>,
    pub selected_career: Option<String>,
    pub selected_sub_career: Option<BTreeSet<String>>,
    pub selected_education: Option<String>,
    pub selected_sub_education: Option<BTreeSet<String>>,
    pub selected_company_type: Option<String>,
    pub selected_sub_company_type: Option<BTreeSet<String>>,
    pub selected_employment_type: Option<String>,
    pub selected_sub_employment_type: Option<BTreeSet<String>>,
    pub selected_personalized: Option<String>,
    pub selected_sub_personalized: Option<BTreeSet<String>>,
}

impl StoredFilters {
    fn fields_mut(&mut self, dimension: FilterDimension) -> (&mut Option<String>, &mut Option<BTreeSet<String>>) {
        match dimension {
            FilterDimension::Region => (&mut self.selected_region, &mut self.selected_sub_region),
            FilterDimension::Job => (&mut self.selected_job, &mut self.selected_sub_job),
            FilterDimension::Career => (&mut self.selected_career, &mut self.selected_sub_career),
            FilterDimension::Education => (&mut self.selected_education, &mut self.selected_sub_education),
            FilterDimension::CompanyType => (&mut self.selected_company_type, &mut self.selected_sub_company_type),
            FilterDimension::EmploymentType => {
                (&mut self.selected_employment_type, &mut self.selected_sub_employment_type)
            }
            FilterDimension::Personalized => (&mut self.selected_personalized, &mut self.selected_sub_personalized),
        }
    }

    pub fn from_state(state: &FilterState) -> Self {
        let mut stored = Self::default();
        for dimension in FilterDimension::ALL {
            let selector = state.get(dimension);
            let (category, sub_items) = stored.fields_mut(dimension);
            *category = Some(selector.active_category.clone());
            *sub_items = Some(selector.selected_sub_items.clone());
        }
        stored
    }

    pub fn into_state(mut self) -> FilterState {
        let mut state = FilterState::default();
        for dimension in FilterDimension::ALL {
            let (category, sub_items) = self.fields_mut(dimension);
            let selector = state.get_mut(dimension);
            if let Some(category) = category.take() {
                selector.active_category = category;
            }
            if let Some(sub_items) = sub_items.take() {
                selector.selected_sub_items = sub_items;
            }
        }
        state
    }
}


/// Missing or unreadable blobs fall back to defaults; stored values are not
/// checked against the taxonomy.
pub fn load_filters(store: &dyn KeyValueStore, user_id: &str, namespace: &str) -> FilterState {
    let key = filter_storage_key(user_id, namespace);
    let raw = match store.get_item(&key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return FilterState::default(),
        Err(e) => {
            tracing::warn!("could not read stored filters {key}: {e}");
            return FilterState::default();
        }
    };
    match serde_json::from_str::<StoredFilters>(&raw) {
        Ok(stored) => stored.into_state(),
        Err(e) => {
            tracing::warn!("discarding unreadable stored filters {key}: {e}");
            FilterState::default()
        }
    }
}

pub fn save_filters(
    store: &dyn KeyValueStore,
    user_id: &str,
    namespace: &str,
    state: &FilterState,
) -> Result<(), FilterStoreError> {
    let key = filter_storage_key(user_id, namespace);
    let raw = serde_json::to_string(&StoredFilters::from_state(state))?;
    store.set_item(&key, &raw)
}

pub fn clear_filters(store: &dyn KeyValueStore, user_id: &str, namespace: &str) -> Result<(), FilterStoreError> {
    store.remove_item(&filter_storage_key(user_id, namespace))
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_state() -> FilterState {
        let mut state = FilterState::default();
        state.select_category(FilterDimension::Region, "서울");
        state.toggle_sub_item(FilterDimension::Region, "전체");
        state.toggle_sub_item(FilterDimension::Region, "마포구");
        state.select_category(FilterDimension::Career, "경력");
        state.toggle_sub_item(FilterDimension::Personalized, "심한 장애");
        state
    }

    #[test]
    fn round_trips_through_the_store() {
        let store = MemoryStore::default();
        let state = sample_state();
        save_filters(&store, "user-7", "jobSearchFilters", &state).unwrap();
        assert_eq!(load_filters(&store, "user-7", "jobSearchFilters"), state);
    }

    #[test]
    fn keys_are_scoped_by_user_and_namespace() {
        let store = MemoryStore::default();
        save_filters(&store, "user-7", "jobSearchFilters", &sample_state()).unwrap();
        assert_eq!(load_filters(&store, "user-8", "jobSearchFilters"), FilterState::default());
        assert_eq!(load_filters(&store, "user-7", "resumeFilters"), FilterState::default());
        assert!(store.get_item("user-7_jobSearchFilters").unwrap().is_some());
    }

    #[test]
    fn missing_fields_take_dimension_defaults() {
        let store = MemoryStore::default();
        store
            .set_item("u_ns", r#"{"selectedRegion":"부산","selectedSubJob":["웹개발"]}"#)
            .unwrap();
        let state = load_filters(&store, "u", "ns");

        let mut expected = FilterState::default();
        expected.region.active_category = "부산".to_string();
        expected.job.selected_sub_items.insert("웹개발".to_string());
        assert_eq!(state, expected);
        assert_eq!(state.career.active_category, "신입");
    }

    #[test]
    fn corrupt_blob_falls_back_to_defaults() {
        let store = MemoryStore::default();
        store.set_item("u_ns", "{not json").unwrap();
        assert_eq!(load_filters(&store, "u", "ns"), FilterState::default());
    }

    #[test]
    fn clear_removes_the_blob() {
        let store = MemoryStore::default();
        save_filters(&store, "u", "ns", &sample_state()).unwrap();
        clear_filters(&store, "u", "ns").unwrap();
        assert_eq!(store.get_item("u_ns").unwrap(), None);
    }

    #[test]
    fn stored_blob_uses_flat_field_names() {
        let json = serde_json::to_value(StoredFilters::from_state(&FilterState::default())).unwrap();
        assert_eq!(json["selectedRegion"], "전국");
        assert_eq!(json["selectedCareer"], "신입");
        assert_eq!(json["selectedSubPersonalized"], serde_json::json!([]));
    }
}
