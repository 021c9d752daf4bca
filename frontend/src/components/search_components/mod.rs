pub mod search_input_top_bar;
pub mod search_result_list_controls;
