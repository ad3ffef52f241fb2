pub mod error;
pub mod publish;
pub mod serial;
pub mod traits;
pub mod viewer;
