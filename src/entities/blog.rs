use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 表单提交内容（页面表单与 JSON 接口共用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogForm {
    #[serde(default)]
    pub topic: String,
    #[serde(default = "default_word_count")]
    pub word_count: u32,
}

fn default_word_count() -> u32 {
    WordCount::DEFAULT.get()
}

impl Default for BlogForm {
    fn default() -> Self {
        Self { topic: String::new(), word_count: default_word_count() }
    }
}

/// Slider value. Only `MIN..=MAX` can be constructed.
///
/// The label says "words" but the value is handed to the model as a token
/// budget that includes the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordCount(u32);

impl WordCount {
    pub const MIN: WordCount = WordCount(50);
    pub const MAX: WordCount = WordCount(500);
    pub const DEFAULT: WordCount = WordCount(300);

    pub fn new(value: u32) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn blog_prompt(topic: &str) -> String {
    format!("Write a blog on {}:", topic)
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub topic: String,
    pub word_count: WordCount,
    pub content: String,
    pub generated_at: DateTime<Utc>,
}
