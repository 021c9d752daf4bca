//! Job-board API calls grouped by resource.

pub mod jobs;
pub mod job_postings;
pub mod resumes;
