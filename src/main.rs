use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use blog_generator::middleware::{error_handler, Logging};
use blog_generator::routes;
use blog_generator::service::models::{HubModelProvider, ModelManager};
use blog_generator::service::BlogService;
use blog_generator::utils::init;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 初始化应用配置和日志系统
    let config = init::init()
        .context("初始化应用程序失败")
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let provider = Arc::new(HubModelProvider::new(&config));
    let models = Arc::new(ModelManager::new(provider));

    // 预加载模型，获取失败时直接退出
    if config.model.preload {
        let preload = models.clone();
        web::block(move || preload.generator().map(|_| ()))
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?
            .map_err(|e| {
                log::error!("模型预加载失败: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e)
            })?;
    }

    let service = web::Data::new(BlogService::new(models));
    let host = config.server.host.clone();
    let port = config.server.port;
    let shutdown_timeout = config.server.shutdown_timeout;
    log::info!("监听 http://{}:{}", host, port);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(error_handler())
            .wrap(Logging)
            .configure(routes::configure)
    })
    .bind((host, port))?
    .shutdown_timeout(shutdown_timeout); // 优雅关闭等待时间

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server.run().await
}
