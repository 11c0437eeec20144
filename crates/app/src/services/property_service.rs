//! Property service — use-cases for creating and listing properties.

use listings_domain::error::ListingsError;
use listings_domain::property::{NewProperty, Property};

use crate::ports::PropertyRepository;

/// Application service for the property listing use-cases.
pub struct PropertyService<R> {
    repo: R,
}

impl<R: PropertyRepository> PropertyService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new property after validating domain invariants.
    ///
    /// The repository assigns the identifier and creation timestamp; the
    /// returned record carries both.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, property), fields(title = %property.title))]
    pub async fn create_property(&self, property: NewProperty) -> Result<Property, ListingsError> {
        property.validate()?;
        let created = self.repo.insert(property).await?;
        tracing::debug!(id = %created.id, "property created");
        Ok(created)
    }

    /// List all properties, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_properties(&self) -> Result<Vec<Property>, ListingsError> {
        self.repo.list_newest_first().await
    }
}
