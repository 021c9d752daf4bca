pub mod url_param;
pub mod current_user;
pub mod local_storage;
pub mod filter_controller;
