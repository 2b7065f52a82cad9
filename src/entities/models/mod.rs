pub mod llama;
pub mod model;

pub use llama::{LlamaModel, SamplingOptions};
pub use model::{ModelError, ModelProvider, TextGenerator};
