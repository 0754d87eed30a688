pub mod select_field;
