use crate::utils::config::ModelConfig;
use anyhow::{Context, Result};
use hf_hub::api::sync::{Api, ApiBuilder, ApiRepo};
use hf_hub::{Repo, RepoType};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// 从 Hugging Face Hub 拉取模型文件，已缓存的文件不会重复下载
pub struct ModelDownloader {
    repo: ApiRepo,
    model_id: String,
}

impl ModelDownloader {
    pub fn new(model: &ModelConfig, cache_dir: &str) -> Result<Self> {
        let api: Api = ApiBuilder::new()
            .with_token(model.token())
            .with_cache_dir(PathBuf::from(cache_dir))
            .build()
            .context("failed to build hub client")?;
        let repo = match &model.revision {
            Some(revision) => {
                Repo::with_revision(model.hf_hub_id.clone(), RepoType::Model, revision.clone())
            }
            None => Repo::model(model.hf_hub_id.clone()),
        };
        Ok(Self { repo: api.repo(repo), model_id: model.hf_hub_id.clone() })
    }

    pub fn fetch(&self, filename: &str) -> Result<PathBuf> {
        log::debug!("Fetching {}/{}", self.model_id, filename);
        self.repo
            .get(filename)
            .with_context(|| format!("failed to fetch {} from {}", filename, self.model_id))
    }

    /// 下载权重分片：显式列出的文件，或索引文件中引用的全部分片
    pub fn fetch_weights(&self, weights: &[String], weights_index: &str) -> Result<Vec<PathBuf>> {
        let names = if weights.is_empty() {
            let index_path = self.fetch(weights_index)?;
            let index = std::fs::read(&index_path)
                .with_context(|| format!("failed to read {}", index_path.display()))?;
            shard_names(&index)?
        } else {
            weights.to_vec()
        };
        names.iter().map(|name| self.fetch(name)).collect()
    }
}

/// Unique shard file names referenced by a safetensors index, in sorted order.
pub fn shard_names(index: &[u8]) -> Result<Vec<String>> {
    let index: serde_json::Value = serde_json::from_slice(index)?;
    let weight_map = index["weight_map"]
        .as_object()
        .context("safetensors index has no weight_map")?;
    let shards = weight_map
        .values()
        .filter_map(|v| v.as_str())
        .map(str::to_string)
        .collect::<BTreeSet<_>>();
    if shards.is_empty() {
        anyhow::bail!("safetensors index references no shards");
    }
    Ok(shards.into_iter().collect())
}
