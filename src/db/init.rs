use sqlx::sqlite::SqliteQueryResult;

pub async fn create_quotations(
    connection: &sqlx::Pool<sqlx::Sqlite>,
) -> Result<SqliteQueryResult, sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quotations (
            id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            code TEXT,
            codein TEXT,
            name TEXT,
            high TEXT,
            low TEXT,
            varBid TEXT,
            pctChange TEXT,
            bid TEXT,
            ask TEXT,
            timestamp TEXT,
            createDate TEXT
        )
        "#,
    )
    .execute(connection)
    .await
}
