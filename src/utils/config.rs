use crate::entities::models::SamplingOptions;
use serde::Deserialize;

pub const CONFIG_PATH_ENV: &str = "APP_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/app.yml";
pub const TOKEN_ENV: &str = "HUGGINGFACE_TOKEN";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout: u64,
    #[serde(default)]
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalesConfig {
    pub default: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelFiles {
    pub config: String,
    pub tokenizer: String,
    /// Safetensors index used to discover shards when `weights` is empty.
    #[serde(default = "default_weights_index")]
    pub weights_index: String,
    #[serde(default)]
    pub weights: Vec<String>,
}

fn default_weights_index() -> String {
    "model.safetensors.index.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub hf_hub_id: String,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub auth_token: String,
    #[serde(default = "default_dtype")]
    pub dtype: String,
    #[serde(default = "default_preload")]
    pub preload: bool,
    pub model_files: ModelFiles,
    #[serde(default)]
    pub sampling: SamplingOptions,
}

fn default_dtype() -> String {
    "f32".to_string()
}

fn default_preload() -> bool {
    true
}

impl ModelConfig {
    /// 空字符串表示匿名访问
    pub fn token(&self) -> Option<String> {
        let token = self.auth_token.trim();
        (!token.is_empty()).then(|| token.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub locales: LocalesConfig,
    pub models_cache_dir: String,
    pub model: ModelConfig,
}

impl AppConfig {
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        let config_file = std::fs::File::open(config_path)?;
        let config: Self = serde_yaml::from_reader(config_file)?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// 按 `APP_CONFIG` 指定的路径加载，并应用环境变量覆盖
    pub fn from_env() -> anyhow::Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load(&path)?;
        config.apply_token_override(std::env::var(TOKEN_ENV).ok());
        Ok(config)
    }

    pub fn apply_token_override(&mut self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.model.auth_token = token;
        }
    }
}
