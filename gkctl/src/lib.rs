pub mod listing;
pub mod records;
