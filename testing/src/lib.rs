pub mod fixture;
pub mod mock;
