use crate::entities::generation::{GenerationRequest, GenerationResult};
use crate::entities::models::model::{ModelError, TextGenerator};
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::generation::{LogitsProcessor, Sampling};
use candle_transformers::models::llama::{Cache, Config, Llama, LlamaConfig};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Mutex;
use tokenizers::Tokenizer;

const EOS_TOKEN: &str = "</s>";

/// 采样设置，对应模型自带的 generation_config
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SamplingOptions {
    #[serde(default)]
    pub top_k: Option<usize>,
    #[serde(default)]
    pub top_p: Option<f64>,
    /// Fixed seed for reproducible sampling. Random per request when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// 本地缓存中的模型文件
#[derive(Debug, Clone)]
pub struct LlamaFiles {
    pub config: PathBuf,
    pub tokenizer: PathBuf,
    pub weights: Vec<PathBuf>,
}

/// Llama 因果语言模型，分词器与权重在加载后只读共享
pub struct LlamaModel {
    model: Mutex<Llama>,
    config: Config,
    tokenizer: Tokenizer,
    device: Device,
    dtype: DType,
    eos_token_id: Option<u32>,
    sampling: SamplingOptions,
}

impl LlamaModel {
    pub fn load(
        files: &LlamaFiles,
        dtype: DType,
        device: Device,
        sampling: SamplingOptions,
    ) -> Result<Self, ModelError> {
        log::info!("Loading Llama weights from {} shard(s) on {:?}", files.weights.len(), device);

        let tokenizer = Tokenizer::from_file(&files.tokenizer)
            .map_err(|e| acquisition(format!("failed to load tokenizer: {}", e)))?;

        let raw_config = std::fs::read(&files.config)
            .map_err(|e| acquisition(format!("failed to read {}: {}", files.config.display(), e)))?;
        let llama_config: LlamaConfig = serde_json::from_slice(&raw_config)
            .map_err(|e| acquisition(format!("incompatible model config: {}", e)))?;
        let config = llama_config.into_config(false);

        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&files.weights, dtype, &device) }
            .map_err(|e| acquisition(format!("failed to map weights: {}", e)))?;
        let model = Llama::load(vb, &config)
            .map_err(|e| acquisition(format!("failed to build model: {}", e)))?;

        let eos_token_id = tokenizer.token_to_id(EOS_TOKEN);
        if eos_token_id.is_none() {
            log::warn!("Tokenizer has no {} token, generation only stops at max_length", EOS_TOKEN);
        }

        Ok(Self { model: Mutex::new(model), config, tokenizer, device, dtype, eos_token_id, sampling })
    }

    fn run(&self, request: &GenerationRequest) -> candle_core::Result<String> {
        let prompt_ids = self
            .tokenizer
            .encode(request.prompt.as_str(), true)
            .map_err(candle_core::Error::msg)?
            .get_ids()
            .to_vec();
        let budget = request.max_length.saturating_sub(prompt_ids.len());
        log::debug!("Prompt tokens: {}, new token budget: {}", prompt_ids.len(), budget);

        let sampling = sampling_for(request, &self.sampling).map_err(candle_core::Error::msg)?;
        let seed = self.sampling.seed.unwrap_or_else(rand::random);
        let mut logits_processor = LogitsProcessor::from_sampling(seed, sampling);

        let model = self
            .model
            .lock()
            .map_err(|_| candle_core::Error::msg("model lock poisoned"))?;
        let mut cache = Cache::new(true, self.dtype, &self.config, &self.device)?;
        let mut tokens = prompt_ids.clone();

        for index in 0..budget {
            let context_size = if index > 0 { 1 } else { tokens.len() };
            let start = tokens.len() - context_size;
            let input = Tensor::new(&tokens[start..], &self.device)?.unsqueeze(0)?;
            let logits = model.forward(&input, start, &mut cache)?;
            let logits = logits.squeeze(0)?.to_dtype(DType::F32)?;

            let next_token = logits_processor.sample(&logits)?;
            tokens.push(next_token);
            if Some(next_token) == self.eos_token_id {
                break;
            }
        }
        drop(model);

        let prompt_text = self.tokenizer.decode(&prompt_ids, true).map_err(candle_core::Error::msg)?;
        let full_text = self.tokenizer.decode(&tokens, true).map_err(candle_core::Error::msg)?;
        let continuation = full_text.get(prompt_text.len()..).unwrap_or_default();
        log::debug!("Generated {} new token(s)", tokens.len() - prompt_ids.len());

        Ok(format!("{}{}", request.prompt, continuation))
    }
}

impl TextGenerator for LlamaModel {
    fn generate(&self, request: &GenerationRequest) -> Result<Vec<GenerationResult>, ModelError> {
        let text = self.run(request).map_err(|e| ModelError::GenerationFailed(e.to_string()))?;
        Ok(vec![GenerationResult::new(text)])
    }
}

fn acquisition(message: String) -> ModelError {
    ModelError::AcquisitionFailed(message)
}

fn sampling_for(
    request: &GenerationRequest,
    options: &SamplingOptions,
) -> Result<Sampling, ModelError> {
    if !request.do_sample {
        return Ok(Sampling::ArgMax);
    }
    let temperature = request.temperature;
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(ModelError::GenerationFailed(format!(
            "temperature must be a strictly positive float when sampling, got {}",
            temperature
        )));
    }
    Ok(match (options.top_k, options.top_p) {
        (None, None) => Sampling::All { temperature },
        (Some(k), None) => Sampling::TopK { k, temperature },
        (None, Some(p)) => Sampling::TopP { p, temperature },
        (Some(k), Some(p)) => Sampling::TopKThenTopP { k, p, temperature },
    })
}
