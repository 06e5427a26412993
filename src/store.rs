use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, types::Json, Executor, Pool, Postgres, Row};

use crate::{
    api::{CategoryStore, TariffStore},
    entities::{TariffTable, VehicleCategory},
    error::Error,
};

type Database = Postgres;

// Category and tariff configuration persisted as JSONB documents. The
// tariff is a singleton row, seeded with the default table on first start.
pub struct PgCatalog {
    pool: Pool<Database>,
}

impl PgCatalog {
    #[tracing::instrument(name = "PgCatalog::new", skip_all)]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        pool.execute(
            "CREATE TABLE IF NOT EXISTS categories (name VARCHAR PRIMARY KEY, data JSONB NOT NULL)",
        )
        .await?;

        pool.execute(
            "CREATE TABLE IF NOT EXISTS tariffs (id INT4 PRIMARY KEY, data JSONB NOT NULL)",
        )
        .await?;

        let catalog = Self { pool };
        catalog.seed_default_tariff().await?;

        Ok(catalog)
    }

    async fn seed_default_tariff(&self) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO tariffs (id, data) VALUES (1, $1) ON CONFLICT (id) DO NOTHING",
            )
            .bind(Json(TariffTable::default())),
        )
        .await?;

        Ok(())
    }
}

#[async_trait]
impl CategoryStore for PgCatalog {
    #[tracing::instrument(skip(self))]
    async fn find_category(&self, name: &str) -> Result<Option<VehicleCategory>, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM categories WHERE name = $1").bind(name))
            .await?;

        match maybe_result {
            Some(result) => {
                let Json(category) = result.try_get("data")?;
                Ok(Some(category))
            }
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<VehicleCategory>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query("SELECT data FROM categories ORDER BY name"))
            .await?;

        let mut categories = Vec::with_capacity(rows.len());
        for row in rows {
            let Json(category) = row.try_get("data")?;
            categories.push(category);
        }

        Ok(categories)
    }

    #[tracing::instrument(skip(self))]
    async fn upsert_category(&self, category: &VehicleCategory) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO categories (name, data) VALUES ($1, $2)
                 ON CONFLICT (name) DO UPDATE SET data = $2",
            )
            .bind(&category.name)
            .bind(Json(category)),
        )
        .await?;

        Ok(())
    }
}

#[async_trait]
impl TariffStore for PgCatalog {
    #[tracing::instrument(skip(self))]
    async fn active_tariff(&self) -> Result<TariffTable, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM tariffs WHERE id = 1"))
            .await?;

        match maybe_result {
            Some(result) => {
                let Json(tariff) = result.try_get("data")?;
                Ok(tariff)
            }
            None => Ok(TariffTable::default()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn save_tariff(&self, tariff: &TariffTable) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO tariffs (id, data) VALUES (1, $1)
                 ON CONFLICT (id) DO UPDATE SET data = $1",
            )
            .bind(Json(tariff)),
        )
        .await?;

        Ok(())
    }
}
