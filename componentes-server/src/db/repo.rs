//! Componente repository
//!
//! Every operation is a single parameterized statement; a connection is
//! borrowed from the pool only for its duration. Update merges against
//! the stored row with COALESCE so absent fields keep their values.

use sqlx::PgPool;

use crate::models::{Componente, ComponenteCambios, NuevoComponente};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("componente not found")]
    NotFound,
}

/// Componente repository
pub struct ComponenteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ComponenteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all componentes ordered by ascending id.
    pub async fn list(&self) -> Result<Vec<Componente>, DbError> {
        let rows = sqlx::query_as::<_, Componente>(
            "SELECT id, nombre, tipo, marca, precio, stock FROM componentes ORDER BY id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single componente by id.
    pub async fn get(&self, id: i32) -> Result<Componente, DbError> {
        sqlx::query_as::<_, Componente>(
            "SELECT id, nombre, tipo, marca, precio, stock FROM componentes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound)
    }

    /// Insert a new componente, returning the stored row with its
    /// generated id.
    pub async fn create(&self, nuevo: NuevoComponente) -> Result<Componente, DbError> {
        let row = sqlx::query_as::<_, Componente>(
            r#"
            INSERT INTO componentes (nombre, tipo, marca, precio, stock)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, nombre, tipo, marca, precio, stock
            "#,
        )
        .bind(&nuevo.nombre)
        .bind(&nuevo.tipo)
        .bind(&nuevo.marca)
        .bind(nuevo.precio)
        .bind(nuevo.stock)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Partial update: any field bound as NULL keeps its stored value.
    /// Zero rows updated means the id does not exist.
    pub async fn update(
        &self,
        id: i32,
        cambios: ComponenteCambios,
    ) -> Result<Componente, DbError> {
        sqlx::query_as::<_, Componente>(
            r#"
            UPDATE componentes
            SET
                nombre = COALESCE($1, nombre),
                tipo = COALESCE($2, tipo),
                marca = COALESCE($3, marca),
                precio = COALESCE($4, precio),
                stock = COALESCE($5, stock)
            WHERE id = $6
            RETURNING id, nombre, tipo, marca, precio, stock
            "#,
        )
        .bind(&cambios.nombre)
        .bind(&cambios.tipo)
        .bind(&cambios.marca)
        .bind(cambios.precio)
        .bind(cambios.stock)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound)
    }

    /// Delete by id, returning the row as it was before deletion.
    pub async fn delete(&self, id: i32) -> Result<Componente, DbError> {
        sqlx::query_as::<_, Componente>(
            "DELETE FROM componentes WHERE id = $1 RETURNING id, nombre, tipo, marca, precio, stock",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;
    use crate::db::{bootstrap, create_pool};
    use crate::models::ComponentePayload;

    // Integration tests - run with DB_* env vars set
    // cargo test -p componentes-server -- --ignored

    async fn test_pool() -> PgPool {
        let config = DbConfig::from_env();
        let pool = create_pool(config.connect_options())
            .await
            .expect("pool creation failed");
        bootstrap::run(&pool).await.expect("bootstrap failed");
        pool
    }

    fn payload(nombre: &str, tipo: &str) -> ComponentePayload {
        ComponentePayload {
            nombre: Some(nombre.to_owned()),
            tipo: Some(tipo.to_owned()),
            ..Default::default()
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let pool = test_pool().await;
        let repo = ComponenteRepo::new(&pool);

        let nuevo = payload("RAM 8GB", "Memoria").into_nuevo().unwrap();
        let created = repo.create(nuevo).await.expect("create failed");

        assert!(created.id > 0);
        assert_eq!(created.marca, None);
        assert_eq!(created.precio, 0.0);
        assert_eq!(created.stock, 0);

        let fetched = repo.get(created.id).await.expect("get failed");
        assert_eq!(fetched.nombre, created.nombre);
        assert_eq!(fetched.tipo, created.tipo);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ids_are_strictly_increasing() {
        let pool = test_pool().await;
        let repo = ComponenteRepo::new(&pool);

        let first = repo
            .create(payload("SSD 1TB", "Almacenamiento").into_nuevo().unwrap())
            .await
            .unwrap();
        let second = repo
            .create(payload("SSD 2TB", "Almacenamiento").into_nuevo().unwrap())
            .await
            .unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn partial_update_preserves_untouched_fields() {
        let pool = test_pool().await;
        let repo = ComponenteRepo::new(&pool);

        let mut base = payload("GPU", "Grafica");
        base.precio = Some(50.0);
        let created = repo.create(base.into_nuevo().unwrap()).await.unwrap();

        let cambios = ComponenteCambios {
            nombre: Some("GPU".into()),
            tipo: Some("Grafica".into()),
            marca: None,
            precio: None,
            stock: Some(5),
        };
        let updated = repo.update(created.id, cambios).await.unwrap();

        assert_eq!(updated.precio, 50.0);
        assert_eq!(updated.stock, 5);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_twice_reports_not_found() {
        let pool = test_pool().await;
        let repo = ComponenteRepo::new(&pool);

        let created = repo
            .create(payload("Fuente 650W", "Alimentacion").into_nuevo().unwrap())
            .await
            .unwrap();

        let deleted = repo.delete(created.id).await.expect("delete failed");
        assert_eq!(deleted.id, created.id);

        assert!(matches!(
            repo.delete(created.id).await.unwrap_err(),
            DbError::NotFound
        ));
        assert!(matches!(
            repo.get(created.id).await.unwrap_err(),
            DbError::NotFound
        ));
    }
}
