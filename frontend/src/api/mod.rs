pub mod job_api;
