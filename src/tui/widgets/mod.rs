pub mod bottom;
pub mod header;
pub mod select;
