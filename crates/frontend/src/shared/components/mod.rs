pub mod date_range_loader;
pub mod editable_table;
pub mod material_document;
pub mod notice;
pub mod pagination_controls;
pub mod table_screen;
