pub mod project;
pub mod schema;
