//! Shared key-value cache client.
//!
//! [`CacheClient`] wraps a pooled Redis connection and exposes the two
//! operations the system needs: publish a JSON value under a well-known
//! key with no expiration, and read a key back. Values are overwritten by
//! the next refresh pass, never time-expired.

use bb8_redis::bb8;
use bb8_redis::redis::AsyncCommands;
use bb8_redis::RedisConnectionManager;
use serde::Serialize;

pub mod keys;

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The Redis command or connection failed.
    #[error("Redis error: {0}")]
    Redis(#[from] bb8_redis::redis::RedisError),

    /// The connection pool could not hand out a connection.
    #[error("Redis pool error: {0}")]
    Pool(#[from] bb8::RunError<bb8_redis::redis::RedisError>),

    /// The payload could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Pooled Redis client. Cheap to clone; all clones share one pool.
#[derive(Clone)]
pub struct CacheClient {
    pool: bb8::Pool<RedisConnectionManager>,
}

impl CacheClient {
    /// Connect to Redis at `redis_url` (e.g. `redis://127.0.0.1:6379`).
    pub async fn connect(redis_url: &str) -> Result<Self, CacheError> {
        let manager = RedisConnectionManager::new(redis_url)?;
        let pool = bb8::Pool::builder().build(manager).await?;
        Ok(Self { pool })
    }

    /// Serialize `value` and store it under `key` with no TTL, replacing
    /// any previous value. Concurrent publishes to different keys never
    /// conflict; the last write to the same key wins.
    pub async fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let payload = serde_json::to_string(value)?;
        let mut conn = self.pool.get().await?;
        let _: () = conn.set(key, payload).await?;
        Ok(())
    }

    /// Read the raw JSON string stored under `key`, if any.
    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.pool.get().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }
}
