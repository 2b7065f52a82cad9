use crate::utils::config::AppConfig;
use anyhow::Context;
use log::info;
use std::sync::Arc;

pub const LOG_CONFIG_PATH: &str = "config/log4rs.yml";

pub fn init() -> crate::error::Result<Arc<AppConfig>> {
    // 初始化日志系统
    log4rs::init_file(LOG_CONFIG_PATH, Default::default())
        .with_context(|| format!("failed to initialize logging from {}", LOG_CONFIG_PATH))?;

    // 加载应用配置
    let config = AppConfig::from_env()?;
    info!("应用配置加载完成");

    // 本地化
    rust_i18n::set_locale(&config.locales.default);
    info!("默认语言: {}", config.locales.default);

    info!(
        "模型: {} (dtype: {}, 预加载: {}, 鉴权: {})",
        config.model.hf_hub_id,
        config.model.dtype,
        config.model.preload,
        if config.model.token().is_some() { "token" } else { "anonymous" }
    );

    Ok(Arc::new(config))
}
