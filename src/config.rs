//! 配置模块
//!
//! 所有地址、端口和超时均为固定常量，这里只把它们集中成结构体，
//! 便于启动流程和测试以相同方式构造服务

use std::time::Duration;

/// 上游汇率 API（美元兑巴西雷亚尔）
pub const UPSTREAM_QUOTATION_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// SQLite 数据库文件
pub const DATABASE_PATH: &str = "data.db";
/// 监听地址
pub const SERVER_HOST: &str = "0.0.0.0";
/// 监听端口
pub const SERVER_PORT: u16 = 8080;
/// 上游请求超时（毫秒），从发起请求到读完响应体
pub const UPSTREAM_TIMEOUT_MS: u64 = 200;
/// 单次写入超时（毫秒）
pub const INSERT_TIMEOUT_MS: u64 = 10;
/// 默认日志级别
pub const LOG_LEVEL: &str = "info";

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 上游 API 配置
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// 汇率接口地址
    pub url: String,
    pub timeout_ms: u64,
}

/// 存储配置
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// 数据库文件路径
    pub path: String,
    pub insert_timeout_ms: u64,
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub store: StoreConfig,
    pub log: LogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: SERVER_HOST.to_string(),
            port: SERVER_PORT,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: UPSTREAM_QUOTATION_URL.to_string(),
            timeout_ms: UPSTREAM_TIMEOUT_MS,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: DATABASE_PATH.to_string(),
            insert_timeout_ms: INSERT_TIMEOUT_MS,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LOG_LEVEL.to_string(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl StoreConfig {
    pub fn insert_timeout(&self) -> Duration {
        Duration::from_millis(self.insert_timeout_ms)
    }
}

impl AppConfig {
    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
