//! Blog Generator
//!
//! A single-page form that turns a topic and a word-count slider value into a
//! blog draft written by a Hugging Face causal language model.
//!
//! # Modules
//! - `controller`: HTTP handlers for the page and the JSON API
//! - `entities`: Request, result and form types, model traits and the Llama model
//! - `error`: Error types and their HTTP rendering
//! - `middleware`: Request logging and error handling
//! - `routes`: Route registration
//! - `service`: Memoized model resource and the blog interaction handler
//! - `utils`: Configuration, logging setup and hub downloads
//! - `view`: Page rendering
//!
//! # Examples
//! ```rust,no_run
//! use actix_web::{web, App, HttpServer};
//! use blog_generator::service::models::{HubModelProvider, ModelManager};
//! use blog_generator::service::BlogService;
//! use blog_generator::utils::config::AppConfig;
//! use std::sync::Arc;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = AppConfig::load("config/app.yml").unwrap();
//!     let models = Arc::new(ModelManager::new(Arc::new(HubModelProvider::new(&config))));
//!     let service = web::Data::new(BlogService::new(models));
//!     HttpServer::new(move || {
//!         App::new()
//!             .app_data(service.clone())
//!             .configure(blog_generator::routes::configure)
//!     })
//!     .bind("127.0.0.1:8501")?
//!     .run()
//!     .await
//! }
//! ```

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod controller;
pub mod entities;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod utils;
pub mod view;

pub use entities::*;
pub use error::*;
