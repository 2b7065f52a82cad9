pub mod config;
pub mod download;
pub mod init;

pub use config::AppConfig;
pub use download::ModelDownloader;
pub use init::init;
