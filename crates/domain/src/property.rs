//! Property — a single real-estate listing.
//!
//! A [`NewProperty`] is what callers submit; the store turns it into a
//! [`Property`] by assigning a [`PropertyId`] and a creation [`Timestamp`].

use serde::{Deserialize, Serialize};

use crate::error::{ListingsError, ValidationError};
use crate::id::PropertyId;
use crate::numeric;
use crate::time::Timestamp;

/// A stored property listing.
///
/// Serializes with camelCase keys (`createdAt`) and the category under
/// `type`, which is the shape API clients consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    pub price: f64,
    /// Free-form label such as `for-sale` or `for-rent`.
    pub status: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub property_type: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub size: Option<f64>,
    pub created_at: Timestamp,
}

/// The insert record for a property that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub title: String,
    pub location: String,
    pub price: f64,
    pub status: String,
    pub description: Option<String>,
    pub property_type: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub size: Option<f64>,
}

impl NewProperty {
    /// Create a builder for constructing a [`NewProperty`].
    #[must_use]
    pub fn builder() -> NewPropertyBuilder {
        NewPropertyBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::Validation`] when:
    /// - `title` or `location` is blank ([`ValidationError::EmptyField`])
    /// - `price` or `size` is negative or not finite ([`ValidationError::OutOfRange`])
    pub fn validate(&self) -> Result<(), ListingsError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "title" }.into());
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "location" }.into());
        }
        numeric::check_decimal("price", self.price)?;
        if let Some(size) = self.size {
            numeric::check_decimal("size", size)?;
        }
        Ok(())
    }

    /// Attach the store-assigned identity, producing the stored record.
    #[must_use]
    pub fn into_property(self, id: PropertyId, created_at: Timestamp) -> Property {
        Property {
            id,
            title: self.title,
            location: self.location,
            price: self.price,
            status: self.status,
            description: self.description,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            size: self.size,
            created_at,
        }
    }
}

/// Step-by-step builder for [`NewProperty`].
#[derive(Debug, Default)]
pub struct NewPropertyBuilder {
    title: Option<String>,
    location: Option<String>,
    price: Option<f64>,
    status: Option<String>,
    description: Option<String>,
    property_type: Option<String>,
    bedrooms: Option<u32>,
    bathrooms: Option<u32>,
    size: Option<f64>,
}

impl NewPropertyBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    #[must_use]
    pub fn bedrooms(mut self, bedrooms: u32) -> Self {
        self.bedrooms = Some(bedrooms);
        self
    }

    #[must_use]
    pub fn bathrooms(mut self, bathrooms: u32) -> Self {
        self.bathrooms = Some(bathrooms);
        self
    }

    #[must_use]
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Consume the builder, validate, and return a [`NewProperty`].
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::Validation`] if `price` is missing or any
    /// invariant checked by [`NewProperty::validate`] fails.
    pub fn build(self) -> Result<NewProperty, ListingsError> {
        let price = self
            .price
            .ok_or(ValidationError::EmptyField { field: "price" })?;
        let property = NewProperty {
            title: self.title.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            price,
            status: self.status.unwrap_or_default(),
            description: self.description,
            property_type: self.property_type.unwrap_or_default(),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            size: self.size,
        };
        property.validate()?;
        Ok(property)
    }
}
