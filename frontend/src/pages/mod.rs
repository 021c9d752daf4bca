pub mod home_page;
pub mod job_search_page;
pub mod job_recommend_page;
pub mod job_posting_editor_page;
pub mod resume_editor_page;
