pub mod blog;
pub mod models;

pub use blog::BlogService;
pub use models::{ModelManager, ModelStatus};
