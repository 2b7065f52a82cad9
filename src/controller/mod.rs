pub mod blog;
pub mod models;
