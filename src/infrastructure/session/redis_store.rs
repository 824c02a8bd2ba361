//! Redis-backed session store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::domain::entities::SessionRecord;
use crate::domain::repositories::{SessionStore, StoreError, StoreResult};

const IDENTITY_FIELD: &str = "identity";
const EXPIRES_AT_FIELD: &str = "expires_at";

/// Session store keeping each session as a Redis hash.
///
/// A session lives at `{key_prefix}{token}` with the fields `identity` and
/// `expires_at`. Other fields written by the login handler are left alone,
/// so clearing a session only drops its authentication state.
pub struct RedisSessionStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisSessionStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> StoreResult<Self> {
        info!("Connecting to Redis session store");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis session store");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    fn build_key(&self, token: &str) -> String {
        format!("{}{}", self.key_prefix, token)
    }
}

/// Converts the hash fields of a session into a record.
///
/// An empty hash means the session does not exist.
fn decode_record(
    token: &str,
    mut fields: HashMap<String, String>,
) -> StoreResult<Option<SessionRecord>> {
    if fields.is_empty() {
        return Ok(None);
    }

    let identity = fields.remove(IDENTITY_FIELD);
    let expires_at = match fields.remove(EXPIRES_AT_FIELD) {
        Some(raw) => Some(raw.trim().parse::<i64>().map_err(|e| StoreError::Corrupt {
            token: token.to_string(),
            reason: format!("expires_at {:?} is not a timestamp: {}", raw, e),
        })?),
        None => None,
    };

    Ok(Some(SessionRecord {
        identity,
        expires_at,
    }))
}

/// Hash fields to write for `record`; absent values are omitted.
fn encode_record(record: &SessionRecord) -> Vec<(&'static str, String)> {
    let mut fields = Vec::with_capacity(2);
    if let Some(identity) = &record.identity {
        fields.push((IDENTITY_FIELD, identity.clone()));
    }
    if let Some(expires_at) = record.expires_at {
        fields.push((EXPIRES_AT_FIELD, expires_at.to_string()));
    }
    fields
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, token: &str) -> StoreResult<Option<SessionRecord>> {
        let key = self.build_key(token);
        let mut conn = self.client.clone();

        let fields: HashMap<String, String> = conn
            .hgetall(&key)
            .await
            .map_err(|e| StoreError::Operation(format!("HGETALL {} failed: {}", key, e)))?;

        decode_record(token, fields)
    }

    async fn clear(&self, token: &str) -> StoreResult<()> {
        let key = self.build_key(token);
        let mut conn = self.client.clone();

        let removed: i64 = conn
            .hdel(&key, &[IDENTITY_FIELD, EXPIRES_AT_FIELD][..])
            .await
            .map_err(|e| StoreError::Operation(format!("HDEL {} failed: {}", key, e)))?;

        if removed > 0 {
            debug!("Session cleared: {}", key);
        }
        Ok(())
    }

    async fn put(&self, token: &str, record: SessionRecord) -> StoreResult<()> {
        let key = self.build_key(token);
        let mut conn = self.client.clone();
        let fields = encode_record(&record);

        let mut pipe = redis::pipe();
        pipe.atomic()
            .hdel(&key, &[IDENTITY_FIELD, EXPIRES_AT_FIELD][..])
            .ignore();
        if !fields.is_empty() {
            pipe.hset_multiple(&key, fields.as_slice()).ignore();
        }

        let (): () = pipe
            .query_async(&mut conn)
            .await
            .map_err(|e| StoreError::Operation(format!("Writing {} failed: {}", key, e)))?;

        debug!("Session stored: {}", key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
