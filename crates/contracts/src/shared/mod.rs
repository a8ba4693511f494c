pub mod api;
pub mod date_range;
#[cfg(feature = "excel")]
pub mod export;
pub mod table;
