//! Server-side access to the remote job-board REST API.

pub mod api;
pub mod config;
pub mod http_utils;
