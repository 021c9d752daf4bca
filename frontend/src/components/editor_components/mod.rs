pub mod editor_form;
