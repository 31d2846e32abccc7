pub mod docs;
pub mod error;
pub mod logging;
