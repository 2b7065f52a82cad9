//! 模型资源管理
//!
//! 本模块负责文本生成模型的获取与复用：
//! - 首次访问时通过 `ModelProvider` 获取模型
//! - 之后在进程生命周期内复用同一个实例
//! - 跟踪加载状态与进行中的生成数量
//!
//! # 示例
//! ```rust,no_run
//! use blog_generator::service::models::{HubModelProvider, ModelManager};
//! use blog_generator::utils::config::AppConfig;
//! use std::sync::Arc;
//!
//! let config = AppConfig::load("config/app.yml").unwrap();
//! let manager = ModelManager::new(Arc::new(HubModelProvider::new(&config)));
//! let generator = manager.generator().unwrap();
//! ```

pub mod loader;

pub use crate::entities::models::{ModelError, ModelProvider, TextGenerator};
pub use loader::HubModelProvider;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStatus {
    pub model_id: String,
    pub is_loaded: bool,
    pub in_flight: usize,
}

pub struct ModelManager {
    provider: Arc<dyn ModelProvider>,
    generator: OnceCell<Arc<dyn TextGenerator>>,
    in_flight: AtomicUsize,
}

impl ModelManager {
    /// 创建一个新的ModelManager实例，此时不会加载模型
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self { provider, generator: OnceCell::new(), in_flight: AtomicUsize::new(0) }
    }

    /// 获取共享的文本生成器
    ///
    /// 首次调用时执行模型获取，并发的首次调用会阻塞等待同一次获取完成。
    /// 获取失败不会被缓存，下一次调用会重新尝试。
    ///
    /// # 返回值
    /// * `Ok(Arc<dyn TextGenerator>)` - 每次调用返回同一个实例
    /// * `Err(ModelError::AcquisitionFailed)` - 模型获取失败
    pub fn generator(&self) -> Result<Arc<dyn TextGenerator>, ModelError> {
        self.generator
            .get_or_try_init(|| {
                let model_id = self.provider.model_id();
                let start = Instant::now();
                log::info!("Acquiring model: {}", model_id);
                let generator = self.provider.load().map_err(|e| {
                    log::error!("Failed to acquire model {}: {}", model_id, e);
                    e
                })?;
                log::info!("Model {} ready in {}ms", model_id, start.elapsed().as_millis());
                Ok(generator)
            })
            .map(Arc::clone)
    }

    pub fn is_loaded(&self) -> bool {
        self.generator.get().is_some()
    }

    pub fn status(&self) -> ModelStatus {
        ModelStatus {
            model_id: self.provider.model_id().to_string(),
            is_loaded: self.is_loaded(),
            in_flight: self.in_flight.load(Ordering::SeqCst),
        }
    }

    /// 标记一次进行中的生成，guard 释放时自动结束
    pub fn busy(&self) -> BusyGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        BusyGuard { counter: &self.in_flight }
    }
}

pub struct BusyGuard<'a> {
    counter: &'a AtomicUsize,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}
