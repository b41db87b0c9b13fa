use sqlx::Sqlite;

use crate::models::Quotation;

pub async fn insert_quotation(
    quotation: &Quotation,
    tx: &mut sqlx::Transaction<'_, Sqlite>,
) -> Result<i64, sqlx::Error> {
    let id = sqlx::query(
        r#"
        INSERT INTO quotations
        (code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp, createDate)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&quotation.code)
    .bind(&quotation.codein)
    .bind(&quotation.name)
    .bind(&quotation.high)
    .bind(&quotation.low)
    .bind(&quotation.var_bid)
    .bind(&quotation.pct_change)
    .bind(&quotation.bid)
    .bind(&quotation.ask)
    .bind(&quotation.timestamp)
    .bind(&quotation.create_date)
    .execute(&mut **tx)
    .await?
    .last_insert_rowid();

    Ok(id)
}
