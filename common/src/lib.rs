//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod taxonomy;
pub mod taxonomy_tables;
pub mod dimension;
pub mod selector_state;
pub mod filter_state;
pub mod filter_params;
pub mod filter_modal;
pub mod filter_consumer;
pub mod persisted_filters;
pub mod request_generation;
pub mod job_query;
pub mod job_posting;
pub mod resume;
