//! 页面渲染

use crate::entities::{BlogForm, BlogPost, WordCount};
use crate::error::AppError;
use minijinja::{context, Environment};
use serde::Serialize;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

#[derive(Debug, Serialize)]
struct Labels {
    title: String,
    subheader: String,
    topic: String,
    word_count: String,
    generate: String,
    generating: String,
}

impl Labels {
    fn localized() -> Self {
        Self {
            title: t!("page.title").to_string(),
            subheader: t!("page.subheader").to_string(),
            topic: t!("page.topic_label").to_string(),
            word_count: t!("page.word_count_label").to_string(),
            generate: t!("page.generate_button").to_string(),
            generating: t!("page.generating").to_string(),
        }
    }
}

/// Renders the form, keeping the submitted values and the generated text or
/// the failure message if any.
pub fn render_page(
    form: &BlogForm,
    post: Option<&BlogPost>,
    error: Option<&str>,
) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.add_template("index.html", INDEX_TEMPLATE)?;
    let template = env.get_template("index.html")?;

    let html = template.render(context! {
        lang => rust_i18n::locale().to_string(),
        labels => Labels::localized(),
        form => form,
        post => post,
        error => error,
        min_words => WordCount::MIN.get(),
        max_words => WordCount::MAX.get(),
    })?;
    Ok(html)
}
