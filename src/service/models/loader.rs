use crate::entities::models::llama::{LlamaFiles, LlamaModel};
use crate::entities::models::{ModelError, ModelProvider, TextGenerator};
use crate::utils::config::{AppConfig, ModelConfig};
use crate::utils::download::ModelDownloader;
use candle_core::{DType, Device};
use std::str::FromStr;
use std::sync::Arc;

/// 基于 Hugging Face Hub 的模型获取：下载配置、分词器与权重后构建 Llama 模型
pub struct HubModelProvider {
    model: ModelConfig,
    cache_dir: String,
}

impl HubModelProvider {
    pub fn new(config: &AppConfig) -> Self {
        Self { model: config.model.clone(), cache_dir: config.models_cache_dir.clone() }
    }

    fn download(&self) -> anyhow::Result<LlamaFiles> {
        std::fs::create_dir_all(&self.cache_dir)?;
        let downloader = ModelDownloader::new(&self.model, &self.cache_dir)?;
        let files = &self.model.model_files;

        Ok(LlamaFiles {
            config: downloader.fetch(&files.config)?,
            tokenizer: downloader.fetch(&files.tokenizer)?,
            weights: downloader.fetch_weights(&files.weights, &files.weights_index)?,
        })
    }
}

impl ModelProvider for HubModelProvider {
    fn model_id(&self) -> &str {
        &self.model.hf_hub_id
    }

    fn load(&self) -> Result<Arc<dyn TextGenerator>, ModelError> {
        let dtype = DType::from_str(&self.model.dtype).map_err(|e| {
            ModelError::AcquisitionFailed(format!("invalid dtype {}: {:?}", self.model.dtype, e))
        })?;
        let device = Device::cuda_if_available(0)
            .map_err(|e| ModelError::AcquisitionFailed(format!("failed to get device: {}", e)))?;

        let files = self.download().map_err(|e| ModelError::AcquisitionFailed(format!("{:#}", e)))?;
        let model = LlamaModel::load(&files, dtype, device, self.model.sampling.clone())?;
        Ok(Arc::new(model))
    }
}
