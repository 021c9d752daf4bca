pub mod filter_button_strip;
pub mod filter_modal_host;
pub mod condition_menu;
pub mod category_selector;
pub mod chip_tray;
