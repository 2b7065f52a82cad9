use crate::entities::generation::{GenerationRequest, GenerationResult};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Model acquisition failed: {0}")]
    AcquisitionFailed(String),
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// 文本生成能力：prompt 加采样参数，返回一个或多个续写结果
pub trait TextGenerator: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> Result<Vec<GenerationResult>, ModelError>;
}

/// 模型获取例程，由 `ModelManager` 在进程生命周期内最多成功调用一次
pub trait ModelProvider: Send + Sync {
    fn model_id(&self) -> &str;

    fn load(&self) -> Result<Arc<dyn TextGenerator>, ModelError>;
}
