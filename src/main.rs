//! 汇率后端服务
//!
//! 提供 GET /cotacao：获取最新美元兑巴西雷亚尔汇率，写入本地 SQLite 并以 JSON 返回
//! 数据来源：AwesomeAPI

mod config;     // 固定配置常量
mod db;         // SQLite 存储
mod error;      // 错误类型
mod handlers;   // HTTP 请求处理器
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务
#[cfg(test)]
mod test_utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use env_logger::Env;

use crate::config::AppConfig;
use crate::db::QuotationStore;
use crate::handlers::AppState;
use crate::services::QuotationService;

/// 初始化阶段：打开数据库、建表、构造 HTTP 客户端
///
/// 任何一步失败都让进程以非零状态退出
async fn init_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store = QuotationStore::open(&config.store)
        .await
        .with_context(|| format!("无法打开数据库 {}", config.store.path))?;
    store.init_schema().await.context("无法创建 quotations 表")?;
    log::info!("数据库已就绪: {}", config.store.path);

    let service = QuotationService::new(&config.upstream).context("无法创建 HTTP 客户端")?;

    Ok(AppState { service, store })
}

/// 应用程序入口
///
/// 启动 HTTP 服务器，监听 0.0.0.0:8080
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::default();

    // 初始化日志系统，默认日志级别为 info
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));

    let state = web::Data::new(init_state(&config).await?);

    log::info!("启动汇率服务，监听 {}", config.bind_addr());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .app_data(state.clone())
            .configure(handlers::config)  // 配置路由
    })
    .bind(config.bind_addr())?
    .run()
    .await?;

    Ok(())
}
