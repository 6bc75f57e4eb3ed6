use async_trait::async_trait;
use sqlx::PgPool;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::ports::MoverStore;

// PostgreSQL/PostGIS-backed mover store writing to `moving.objects`.
#[derive(Clone)]
pub struct PostgresMoverStore {
    pub db: PgPool,
}

impl PostgresMoverStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MoverStore for PostgresMoverStore {
    async fn create_entity(&self, id: u64, x: f64, y: f64, color: &str) -> Result<(), String> {
        // Upsert so a restarted generator reuses the rows of the previous run.
        sqlx::query(
            r#"
            INSERT INTO moving.objects (id, geog, color)
            VALUES ($1, ST_MakePoint($2, $3)::geography, $4)
            ON CONFLICT (id) DO UPDATE SET
                geog = EXCLUDED.geog,
                color = EXCLUDED.color,
                ts = NOW()
            "#,
        )
        .bind(row_id(id)?)
        .bind(x)
        .bind(y)
        .bind(color)
        .execute(&self.db)
        .await
        .map_err(|e| e.to_string())?;

        Ok(())
    }

    async fn update_entity(&self, id: u64, x: f64, y: f64, at: SystemTime) -> Result<(), String> {
        sqlx::query(
            r#"
            UPDATE moving.objects
            SET geog = ST_MakePoint($1, $2)::geography, ts = TO_TIMESTAMP($3)
            WHERE id = $4
            "#,
        )
        .bind(x)
        .bind(y)
        .bind(epoch_seconds(at))
        .bind(row_id(id)?)
        .execute(&self.db)
        .await
        .map_err(|e| e.to_string())?;

        Ok(())
    }
}

// Postgres has no unsigned integers; ids are stored as BIGINT.
fn row_id(id: u64) -> Result<i64, String> {
    i64::try_from(id).map_err(|_| format!("mover id {id} does not fit in BIGINT"))
}

fn epoch_seconds(at: SystemTime) -> f64 {
    at.duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn row_id_rejects_ids_beyond_bigint() {
        assert_eq!(row_id(7), Ok(7));
        assert!(row_id(u64::MAX).is_err());
    }

    #[test]
    fn epoch_seconds_keeps_sub_second_precision() {
        let at = UNIX_EPOCH + Duration::from_millis(1_700_000_000_250);

        assert_eq!(epoch_seconds(at), 1_700_000_000.25);
    }

    #[test]
    fn epoch_seconds_clamps_pre_epoch_times_to_zero() {
        let at = UNIX_EPOCH - Duration::from_secs(5);

        assert_eq!(epoch_seconds(at), 0.0);
    }
}
