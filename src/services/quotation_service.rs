//! 汇率获取服务
//!
//! 对接 AwesomeAPI: https://economia.awesomeapi.com.br/json/last/USD-BRL

use reqwest::Client;

use crate::config::UpstreamConfig;
use crate::db::QuotationStore;
use crate::error::{QuoteError, Result};
use crate::models::{Quotation, UsdBrlEnvelope};

/// 汇率服务
///
/// 持有一个带超时的 HTTP 客户端，不缓存任何报价，每次调用都重新请求上游
pub struct QuotationService {
    /// HTTP 客户端
    client: Client,
    /// 上游接口地址
    url: String,
}

impl QuotationService {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// 获取最新的美元兑雷亚尔报价
    pub async fn fetch_latest(&self) -> Result<Quotation> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(QuoteError::UpstreamStatus(response.status()));
        }

        let bytes = response.bytes().await?;
        let envelope: UsdBrlEnvelope = serde_json::from_slice(&bytes)?;

        if envelope.usdbrl.is_empty() {
            return Err(QuoteError::EmptyQuote);
        }

        Ok(envelope.usdbrl)
    }

    /// 获取报价并写入存储，两步都成功才返回报价
    pub async fn fetch_and_store(&self, store: &QuotationStore) -> Result<Quotation> {
        let quotation = self.fetch_latest().await?;
        let id = store.insert(&quotation).await?;

        log::info!("已保存汇率 #{}: {} = {}", id, quotation.name, quotation.bid);
        Ok(quotation)
    }
}
