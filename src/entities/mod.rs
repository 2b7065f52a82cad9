pub mod blog;
pub mod generation;
pub mod models;

pub use blog::{blog_prompt, BlogForm, BlogPost, WordCount};
pub use generation::{GenerationRequest, GenerationResult, DO_SAMPLE, TEMPERATURE};
