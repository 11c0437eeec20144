//! Property repository port — persistence for listings.

use std::future::Future;

use listings_domain::error::ListingsError;
use listings_domain::property::{NewProperty, Property};

/// Repository for persisting and querying [`Property`] records.
///
/// Implementations own identity: `insert` assigns the [`PropertyId`] and the
/// creation timestamp.
///
/// [`PropertyId`]: listings_domain::id::PropertyId
pub trait PropertyRepository {
    /// Insert a single row and return it as stored.
    fn insert(
        &self,
        property: NewProperty,
    ) -> impl Future<Output = Result<Property, ListingsError>> + Send;

    /// Get every property, ordered by creation time, newest first.
    fn list_newest_first(&self)
    -> impl Future<Output = Result<Vec<Property>, ListingsError>> + Send;
}
