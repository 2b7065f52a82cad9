pub mod models;

pub use models::model_status;
