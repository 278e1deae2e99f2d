pub mod auth;
pub mod error;
pub mod table;
pub mod types;
