//! 博客生成：把表单输入变成一次生成请求，并返回第一条结果

use crate::entities::{
    blog_prompt, BlogForm, BlogPost, GenerationRequest, WordCount, DO_SAMPLE, TEMPERATURE,
};
use crate::error::AppError;
use crate::service::models::{ModelError, ModelManager};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct BlogService {
    models: Arc<ModelManager>,
}

impl BlogService {
    pub fn new(models: Arc<ModelManager>) -> Self {
        Self { models }
    }

    pub fn models(&self) -> &Arc<ModelManager> {
        &self.models
    }

    pub fn request_for(&self, topic: &str, word_count: WordCount) -> GenerationRequest {
        GenerationRequest::new(
            blog_prompt(topic),
            word_count.get() as usize,
            DO_SAMPLE,
            TEMPERATURE,
        )
    }

    /// 处理一次"生成"触发
    ///
    /// 主题为空时不做任何事，返回 `Ok(None)`；否则同步调用模型并返回第一条结果。
    /// 模型获取或生成失败原样向上传递，不重试。
    pub fn generate(&self, form: &BlogForm) -> Result<Option<BlogPost>, AppError> {
        if form.topic.is_empty() {
            log::debug!("Empty topic, nothing to generate");
            return Ok(None);
        }
        let word_count = WordCount::new(form.word_count).ok_or_else(|| {
            AppError::validation(
                "word_count",
                format!(
                    "must be between {} and {}, got {}",
                    WordCount::MIN,
                    WordCount::MAX,
                    form.word_count
                ),
            )
        })?;

        let _busy = self.models.busy();
        let start = Instant::now();
        let request = self.request_for(&form.topic, word_count);
        log::info!("Generating blog for topic {:?} (max_length {})", form.topic, request.max_length);
        log::debug!("Generation request: {:?}", request);

        let generator = self.models.generator()?;
        let result = generator
            .generate(&request)?
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::GenerationFailed("model returned no results".into()))?;

        log::info!(
            "Generated {} chars for {:?} in {}ms",
            result.generated_text.len(),
            form.topic,
            start.elapsed().as_millis()
        );

        Ok(Some(BlogPost {
            topic: form.topic.clone(),
            word_count,
            content: result.generated_text,
            generated_at: Utc::now(),
        }))
    }
}
