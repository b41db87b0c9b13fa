//! 汇率客户端
//!
//! 向本地汇率服务请求最新报价（300ms 内必须完成），并把买入价写入 cotacao.txt。
//! 任何错误都直接以非零状态退出，不重试

use anyhow::{bail, Context};
use env_logger::Env;
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 汇率服务地址
const SERVER_URL: &str = "http://localhost:8080/cotacao";
/// 输出文件
const OUTPUT_PATH: &str = "cotacao.txt";
/// 整个请求（含读取响应体）的超时时间，需大于服务端访问上游的 200ms
const REQUEST_TIMEOUT: Duration = Duration::from_millis(300);

struct ClientConfig {
    server_url: String,
    output_path: PathBuf,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: SERVER_URL.to_string(),
            output_path: PathBuf::from(OUTPUT_PATH),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// 服务响应中客户端关心的部分
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BidQuote {
    bid: String,
    error: String,
}

async fn fetch_bid(config: &ClientConfig) -> anyhow::Result<BidQuote> {
    let client = Client::builder()
        .timeout(config.timeout)
        .build()
        .context("无法创建 HTTP 客户端")?;

    let bytes = client
        .get(&config.server_url)
        .send()
        .await
        .with_context(|| format!("请求 {} 失败", config.server_url))?
        .bytes()
        .await
        .context("读取服务响应失败")?;

    let quote: BidQuote = serde_json::from_slice(&bytes).context("无法解析服务响应")?;

    if !quote.error.is_empty() {
        bail!("{}", quote.error);
    }

    Ok(quote)
}

/// 覆盖写入，旧内容会被截断
fn write_bid(path: &Path, quote: &BidQuote) -> anyhow::Result<()> {
    std::fs::write(path, format!("Dólar: {}\n", quote.bid))
        .with_context(|| format!("无法写入 {}", path.display()))
}

async fn run(config: &ClientConfig) -> anyhow::Result<()> {
    let quote = fetch_bid(config).await?;
    write_bid(&config.output_path, &quote)?;

    log::info!("已写入 {}: Dólar {}", config.output_path.display(), quote.bid);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    run(&ClientConfig::default()).await
}

#[cfg(test)]
#[path = "../test_utils.rs"]
mod test_utils;
