//! The Ejemplo script: a connectivity check, two scalar writes, three reads
//! (one of them a deliberate miss) and three hash field writes, in that order.
//!
//! Each phase stops at the first failing command and returns its error; the
//! caller decides to abort.

use crate::clients::Client;
use crate::Error;
use redis::aio::ConnectionLike;
use tracing::info;

pub const FAVORITE_MOVIE_KEY: &str = "Ejemplo:Favorite Movie";
pub const FAVORITE_MOVIE: &str = "Repo Man";

pub const RELEASE_YEAR_KEY: &str = "Ejemplo:Release Year";
pub const RELEASE_YEAR: i64 = 1984;

/// Never written by the script.
pub const NONEXISTENT_KEY: &str = "Nonexistent Key";

pub const BAR_KEY: &str = "Ejemplo:bar";
pub const BAR_FIELDS: [(&str, &str); 3] = [
    ("1", "First bar"),
    ("2", "Second bar"),
    ("3", "Third Value"),
];

/// What a complete run observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Acknowledgment of the connectivity check.
    pub pong: String,
    pub favorite_movie: String,
    pub release_year: i64,
    /// `None` unless something else stored a value under [`NONEXISTENT_KEY`].
    pub nonexistent: Option<String>,
    /// Hash fields created by the grouped write; fields that already existed count as `0`.
    pub new_fields: i64,
}

/// Values read back by [`get_values`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reads {
    pub favorite_movie: String,
    pub release_year: i64,
    pub nonexistent: Option<String>,
}

/// Run every phase in order over `client`, stopping at the first error.
pub async fn run<C>(client: &mut Client<C>) -> crate::Result<Report>
where
    C: ConnectionLike + Send,
{
    let pong = ping(client).await?;
    set_values(client).await?;
    let reads = get_values(client).await?;
    let new_fields = hset_values(client).await?;

    Ok(Report {
        pong,
        favorite_movie: reads.favorite_movie,
        release_year: reads.release_year,
        nonexistent: reads.nonexistent,
        new_fields,
    })
}

/// Connectivity check. Anything other than `PONG` is an error.
pub async fn ping<C>(client: &mut Client<C>) -> crate::Result<String>
where
    C: ConnectionLike + Send,
{
    let pong = client.ping().await?;
    if pong != "PONG" {
        return Err(Error::UnexpectedReply {
            request: "PING".to_string(),
            reply: pong,
        });
    }
    info!("PING Response = {pong}");

    Ok(pong)
}

/// Store the movie title as a string and its release year as an integer.
pub async fn set_values<C>(client: &mut Client<C>) -> crate::Result<()>
where
    C: ConnectionLike + Send,
{
    info!("Set values");
    client.set(FAVORITE_MOVIE_KEY, FAVORITE_MOVIE).await?;
    client.set(RELEASE_YEAR_KEY, RELEASE_YEAR).await?;

    Ok(())
}

/// Read back both written keys, then the key that should not exist.
///
/// The two written keys must be present. The missing key is logged and
/// reported as `None`.
pub async fn get_values<C>(client: &mut Client<C>) -> crate::Result<Reads>
where
    C: ConnectionLike + Send,
{
    let favorite_movie = client
        .get_string(FAVORITE_MOVIE_KEY)
        .await?
        .ok_or_else(|| missing(FAVORITE_MOVIE_KEY))?;
    info!("{FAVORITE_MOVIE_KEY} = {favorite_movie}");

    let release_year = client
        .get_int(RELEASE_YEAR_KEY)
        .await?
        .ok_or_else(|| missing(RELEASE_YEAR_KEY))?;
    info!("{RELEASE_YEAR_KEY} = {release_year}");

    let nonexistent = client.get_string(NONEXISTENT_KEY).await?;
    match &nonexistent {
        Some(value) => info!("{NONEXISTENT_KEY} = {value}"),
        None => info!("{NONEXISTENT_KEY} does not exist"),
    }

    Ok(Reads {
        favorite_movie,
        release_year,
        nonexistent,
    })
}

/// Write each of [`BAR_FIELDS`] into the hash at [`BAR_KEY`], one `HSET` per field.
///
/// Returns how many fields were newly created.
pub async fn hset_values<C>(client: &mut Client<C>) -> crate::Result<i64>
where
    C: ConnectionLike + Send,
{
    info!("HSet values");
    let mut added = 0;
    for (field, value) in BAR_FIELDS {
        added += client.hset(BAR_KEY, field, value).await?;
    }

    Ok(added)
}

fn missing(key: &str) -> Error {
    Error::Missing {
        key: key.to_string(),
    }
}
