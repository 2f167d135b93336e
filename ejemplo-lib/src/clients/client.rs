//! Redis client wrapper
//!
//! Provides an async connect and methods for issuing the commands the script uses.
//! The wire protocol is handled by the `redis` crate; every method here is one
//! request followed by one reply coerced into a Rust type.

use crate::Error;
use redis::aio::{ConnectionLike, MultiplexedConnection};
use redis::{AsyncCommands, ConnectionAddr, ConnectionInfo, RedisConnectionInfo, ToRedisArgs};
use std::fmt::Debug;
use tracing::{debug, instrument};

/// Backed by a single connection, released when the `Client` is dropped.
pub struct Client<C = MultiplexedConnection> {
    connection: C,
}

impl Client {
    /// Establish a connection with the Redis server at `host:port`.
    #[instrument]
    pub async fn connect(host: &str, port: u16) -> crate::Result<Client> {
        let addr = format!("{host}:{port}");
        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(host.to_string(), port),
            redis: RedisConnectionInfo::default(),
        };

        // `open` only validates the address; the TCP handshake happens when the
        // connection is requested.
        let connection = match redis::Client::open(info) {
            Ok(client) => client.get_multiplexed_async_connection().await,
            Err(source) => Err(source),
        }
        .map_err(|source| Error::Connect { addr, source })?;

        Ok(Client { connection })
    }
}

impl<C> Client<C>
where
    C: ConnectionLike + Send,
{
    /// Wrap an already open connection.
    pub fn new(connection: C) -> Client<C> {
        Client { connection }
    }

    /// `PING` the server and return its acknowledgment, normally `PONG`.
    #[instrument(skip(self))]
    pub async fn ping(&mut self) -> crate::Result<String> {
        debug!(request = "PING");

        let reply: String = redis::cmd("PING")
            .query_async(&mut self.connection)
            .await
            .map_err(|e| Error::from_redis("PING", e))?;
        debug!(?reply);

        Ok(reply)
    }

    /// Set `key` to hold `value`, overwriting whatever it held.
    #[instrument(skip(self))]
    pub async fn set<V>(&mut self, key: &str, value: V) -> crate::Result<()>
    where
        V: ToRedisArgs + Send + Sync + Debug,
    {
        self.connection
            .set::<_, _, ()>(key, value)
            .await
            .map_err(|e| Error::from_redis(format!("SET {key}"), e))
    }

    /// Get the value of `key` as a string.
    ///
    /// # return
    ///
    /// If the key does not exist `None` is returned.
    #[instrument(skip(self))]
    pub async fn get_string(&mut self, key: &str) -> crate::Result<Option<String>> {
        let reply: Option<String> = self
            .connection
            .get(key)
            .await
            .map_err(|e| Error::from_redis(format!("GET {key}"), e))?;
        debug!(?reply);

        Ok(reply)
    }

    /// Get the value of `key` parsed as an integer.
    ///
    /// # return
    ///
    /// If the key does not exist `None` is returned. A value that is not an
    /// integer is an [`Error::Coercion`].
    #[instrument(skip(self))]
    pub async fn get_int(&mut self, key: &str) -> crate::Result<Option<i64>> {
        let reply: Option<i64> = self
            .connection
            .get(key)
            .await
            .map_err(|e| Error::from_redis(format!("GET {key}"), e))?;
        debug!(?reply);

        Ok(reply)
    }

    /// Set `field` in the hash stored at `key` to `value`.
    ///
    /// # return
    ///
    /// Returns the number of fields that were added, `0` when `field` already existed.
    #[instrument(skip(self))]
    pub async fn hset(&mut self, key: &str, field: &str, value: &str) -> crate::Result<i64> {
        let added: i64 = self
            .connection
            .hset(key, field, value)
            .await
            .map_err(|e| Error::from_redis(format!("HSET {key} {field}"), e))?;
        debug!(added);

        Ok(added)
    }
}
