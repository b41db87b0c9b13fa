//! 本地 SQLite 存储
//!
//! `quotations` 表只追加，不更新也不删除

mod init;
mod write;

use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tokio::time::error::Elapsed;
use tokio::time::{timeout_at, Instant};

use crate::config::StoreConfig;
use crate::error::{QuoteError, Result};
use crate::models::Quotation;

/// 汇率存储，启动时创建一次，通过 `web::Data` 注入各个处理器
#[derive(Clone)]
pub struct QuotationStore {
    pool: SqlitePool,
    insert_timeout: Duration,
}

impl QuotationStore {
    /// 打开（必要时创建）数据库文件
    pub async fn open(config: &StoreConfig) -> std::result::Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        Ok(Self::new(pool, config.insert_timeout()))
    }

    pub fn new(pool: SqlitePool, insert_timeout: Duration) -> Self {
        Self {
            pool,
            insert_timeout,
        }
    }

    /// 建表，可重复调用
    pub async fn init_schema(&self) -> std::result::Result<(), sqlx::Error> {
        init::create_quotations(&self.pool).await?;
        Ok(())
    }

    /// 写入一条汇率，返回自增主键
    ///
    /// 获取连接、开启事务、准备和执行语句共用同一个 `insert_timeout` 截止时间。
    /// 超时后事务被丢弃，sqlx 在未完成的语句之后回滚，不会留下记录；
    /// 只有执行成功才提交
    pub async fn insert(&self, quotation: &Quotation) -> Result<i64> {
        let deadline = Instant::now() + self.insert_timeout;
        let expired = |_: Elapsed| QuoteError::StoreTimeout(self.insert_timeout);

        let mut tx = timeout_at(deadline, self.pool.begin())
            .await
            .map_err(expired)??;
        let id = timeout_at(deadline, write::insert_quotation(quotation, &mut tx))
            .await
            .map_err(expired)??;
        tx.commit().await?;

        Ok(id)
    }
}
