//! `SQLite` implementation of [`PropertyRepository`].

use chrono::{SecondsFormat, SubsecRound};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use listings_app::ports::PropertyRepository;
use listings_domain::error::ListingsError;
use listings_domain::id::PropertyId;
use listings_domain::property::{NewProperty, Property};
use listings_domain::time::{self, Timestamp};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Property`].
struct Wrapper(Property);

fn decode_count(value: Option<i64>) -> Result<Option<u32>, sqlx::Error> {
    value
        .map(u32::try_from)
        .transpose()
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;
        let bedrooms: Option<i64> = row.try_get("bedrooms")?;
        let bathrooms: Option<i64> = row.try_get("bathrooms")?;
        let created_at: String = row.try_get("created_at")?;

        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Property {
            id: PropertyId::from_uuid(id),
            title: row.try_get("title")?,
            location: row.try_get("location")?,
            price: row.try_get("price")?,
            status: row.try_get("status")?,
            description: row.try_get("description")?,
            property_type: row.try_get("property_type")?,
            bedrooms: decode_count(bedrooms)?,
            bathrooms: decode_count(bathrooms)?,
            size: row.try_get("size")?,
            created_at,
        }))
    }
}

/// Fixed-width text form of a timestamp, so `ORDER BY created_at` is
/// chronological.
fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

const INSERT: &str = r"
    INSERT INTO properties (
        id, title, location, price, status, description,
        property_type, bedrooms, bathrooms, size, created_at
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

// rowid breaks ties between rows created within the same microsecond
const SELECT_NEWEST_FIRST: &str =
    "SELECT * FROM properties ORDER BY created_at DESC, rowid DESC";

/// `SQLite`-backed property repository.
pub struct SqlitePropertyRepository {
    pool: SqlitePool,
}

impl SqlitePropertyRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PropertyRepository for SqlitePropertyRepository {
    async fn insert(&self, property: NewProperty) -> Result<Property, ListingsError> {
        // stored at microsecond precision; truncate so the returned record
        // matches what a later listing reads back
        let created_at = time::now().trunc_subsecs(6);
        let stored = property.into_property(PropertyId::new(), created_at);

        sqlx::query(INSERT)
            .bind(stored.id.as_uuid())
            .bind(&stored.title)
            .bind(&stored.location)
            .bind(stored.price)
            .bind(&stored.status)
            .bind(stored.description.as_deref())
            .bind(&stored.property_type)
            .bind(stored.bedrooms.map(i64::from))
            .bind(stored.bathrooms.map(i64::from))
            .bind(stored.size)
            .bind(encode_timestamp(stored.created_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(stored)
    }

    async fn list_newest_first(&self) -> Result<Vec<Property>, ListingsError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_NEWEST_FIRST)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
