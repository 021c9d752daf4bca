pub mod job_posting_card;
