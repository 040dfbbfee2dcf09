//! Repository for the `players` table.

use pitchside_core::placement::{format_percent, CENTER_PERCENT};
use pitchside_core::types::DbId;
use sqlx::PgPool;

use crate::models::player::{CreatePlayer, Player, PlayerRecord};

/// Column list for players queries.
const COLUMNS: &str = "id, name, number, position, pos_top, pos_left, created_at";

/// Provides CRUD operations for players.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Register a new player. New signings start at the centre of the board
    /// so they are visible on the squad page straight away.
    pub async fn create(pool: &PgPool, input: &CreatePlayer) -> Result<Player, sqlx::Error> {
        let center = format_percent(CENTER_PERCENT);
        let query = format!(
            "INSERT INTO players (name, number, position, pos_top, pos_left)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(&input.name)
            .bind(input.number)
            .bind(&input.position)
            .bind(&center)
            .fetch_one(pool)
            .await
    }

    /// Find a player by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the full roster ordered by jersey number ascending.
    pub async fn list_by_number(pool: &PgPool) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players ORDER BY number ASC");
        sqlx::query_as::<_, Player>(&query).fetch_all(pool).await
    }

    /// Save the full roster in one batch: every record is upserted by id,
    /// last writer wins per field, with no concurrency check against other
    /// editors. All rows commit or none do.
    pub async fn upsert_roster(
        pool: &PgPool,
        records: &[PlayerRecord],
    ) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!(
            "INSERT INTO players (id, name, number, position, pos_top, pos_left)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (id) DO UPDATE SET
                 name = EXCLUDED.name,
                 number = EXCLUDED.number,
                 position = EXCLUDED.position,
                 pos_top = EXCLUDED.pos_top,
                 pos_left = EXCLUDED.pos_left
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut saved = Vec::with_capacity(records.len());
        for record in records {
            let player = sqlx::query_as::<_, Player>(&query)
                .bind(record.id)
                .bind(&record.name)
                .bind(record.number)
                .bind(&record.position)
                .bind(&record.pos_top)
                .bind(&record.pos_left)
                .fetch_one(&mut *tx)
                .await?;
            saved.push(player);
        }
        tx.commit().await?;

        Ok(saved)
    }
}
