use serde::{Deserialize, Serialize};

/// Blog requests always sample.
pub const DO_SAMPLE: bool = true;
pub const TEMPERATURE: f64 = 0.7;

/// 单次生成请求，每次用户触发时新建，不做持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Upper bound on total tokens, prompt included.
    pub max_length: usize,
    pub do_sample: bool,
    pub temperature: f64,
}

impl GenerationRequest {
    pub fn new(prompt: String, max_length: usize, do_sample: bool, temperature: f64) -> Self {
        Self { prompt, max_length, do_sample, temperature }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub generated_text: String,
}

impl GenerationResult {
    pub fn new(generated_text: impl Into<String>) -> Self {
        Self { generated_text: generated_text.into() }
    }
}
