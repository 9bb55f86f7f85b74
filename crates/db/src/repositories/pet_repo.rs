//! Repository for the `pets_exist` table (pet-ownership registry).

use playcrate_core::types::DbId;
use sqlx::PgPool;

use crate::models::pet::PetRecord;

/// Provides query operations for the pet-ownership registry.
pub struct PetRepo;

impl PetRepo {
    /// Record that a player owns `pet_count` copies of a pet, replacing
    /// any previous count for the same (player, pet) pair.
    pub async fn upsert(pool: &PgPool, pet: &PetRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO pets_exist (roblox_id, pet_id, pet_count) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (roblox_id, pet_id) DO UPDATE SET pet_count = EXCLUDED.pet_count",
        )
        .bind(pet.roblox_id)
        .bind(&pet.pet_id)
        .bind(pet.pet_count)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// The full registry, used to build the cached snapshot.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<PetRecord>, sqlx::Error> {
        sqlx::query_as::<_, PetRecord>(
            "SELECT roblox_id, pet_id, pet_count FROM pets_exist ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// Remove one (player, pet) row. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, roblox_id: DbId, pet_id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets_exist WHERE roblox_id = $1 AND pet_id = $2")
            .bind(roblox_id)
            .bind(pet_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
