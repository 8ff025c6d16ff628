use crate::{error::AppError, model::filter::FilterState, storage::Storage};

const FILTER_STATE_KEY: &str = "filters";

pub fn load_filters_from_storage(storage: &dyn Storage) -> Result<FilterState, AppError> {
    match storage.get(FILTER_STATE_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(FilterState::default()),
    }
}

pub fn save_filters_to_storage(
    storage: &mut dyn Storage,
    filters: &FilterState,
) -> Result<(), AppError> {
    storage.set(FILTER_STATE_KEY, &serde_json::to_string(filters)?)
}

pub fn remove_filters_from_storage(storage: &mut dyn Storage) -> Result<(), AppError> {
    storage.remove(FILTER_STATE_KEY)
}
