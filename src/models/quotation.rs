//! 汇率数据模型
//!
//! 字段全部保持上游返回的字符串形式，不做数值解析

use serde::{Deserialize, Serialize};

/// 单次汇率快照
///
/// `create_date` 在数据库中对应 `createDate` 列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quotation {
    /// 基础货币代码，如 USD
    pub code: String,
    /// 报价货币代码，如 BRL
    pub codein: String,
    /// 货币对名称
    pub name: String,
    /// 最高价
    pub high: String,
    /// 最低价
    pub low: String,
    /// 涨跌额
    #[serde(rename = "varBid")]
    pub var_bid: String,
    /// 涨跌幅（百分比）
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    /// 买入价
    pub bid: String,
    /// 卖出价
    pub ask: String,
    /// Unix 时间戳（字符串）
    pub timestamp: String,
    /// 报价时间
    pub create_date: String,
}

impl Quotation {
    /// 所有字段均为空串时视为上游未返回有效报价
    pub fn is_empty(&self) -> bool {
        [
            &self.code,
            &self.codein,
            &self.name,
            &self.high,
            &self.low,
            &self.var_bid,
            &self.pct_change,
            &self.bid,
            &self.ask,
            &self.timestamp,
            &self.create_date,
        ]
        .iter()
        .all(|field| field.is_empty())
    }
}

/// 上游响应外层结构：`{"USDBRL": {...}}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UsdBrlEnvelope {
    #[serde(rename = "USDBRL")]
    pub usdbrl: Quotation,
}
