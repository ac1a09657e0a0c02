//! Table bootstrap for the componentes resource
//!
//! Creates the single `componentes` table if it does not exist. Safe to
//! run on every startup.

use sqlx::PgPool;

/// Ensure the componentes table exists
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring componentes table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS componentes (
            id SERIAL PRIMARY KEY,
            nombre TEXT NOT NULL,
            tipo TEXT NOT NULL,
            marca TEXT,
            precio DOUBLE PRECISION NOT NULL DEFAULT 0,
            stock INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Table bootstrap complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn bootstrap_is_idempotent() {
        let config = DbConfig::from_env();
        let pool = create_pool(config.connect_options())
            .await
            .expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }
}
