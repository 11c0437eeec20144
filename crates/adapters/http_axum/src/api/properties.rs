//! JSON REST handlers for properties.

use std::borrow::Cow;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use listings_app::ports::PropertyRepository;
use listings_domain::error::{ListingsError, ValidationError};
use listings_domain::numeric;
use listings_domain::property::{NewProperty, Property};

use crate::error::ApiError;
use crate::state::AppState;

const CREATE_FAILED: &str = "Failed to create property";
const ADD_FAILED: &str = "Failed to add property";
const FETCH_FAILED: &str = "Failed to fetch properties";

/// A numeric field as clients send it: a JSON number or numeric text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(serde_json::Number),
    Text(String),
}

impl NumericField {
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Number(number) => Cow::Owned(number.to_string()),
            Self::Text(text) => Cow::Borrowed(text),
        }
    }

    /// Like [`Self::as_text`], but a whole JSON float such as `3.0` reads as `3`.
    fn as_count_text(&self) -> Cow<'_, str> {
        match self {
            Self::Number(number) if number.is_f64() => match number.as_f64() {
                Some(value) if value.fract() == 0.0 => Cow::Owned(format!("{value:.0}")),
                _ => self.as_text(),
            },
            _ => self.as_text(),
        }
    }
}

/// Request body for creating a property.
#[derive(Debug, Deserialize)]
pub struct CreatePropertyRequest {
    pub title: String,
    pub location: String,
    pub price: NumericField,
    pub status: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub property_type: String,
    pub bedrooms: Option<NumericField>,
    pub bathrooms: Option<NumericField>,
    pub size: Option<NumericField>,
}

fn optional<T>(
    text: Option<Cow<'_, str>>,
    parse: impl FnOnce(&str) -> Result<Option<T>, ValidationError>,
) -> Result<Option<T>, ListingsError> {
    match text {
        Some(text) => parse(&text).map_err(ListingsError::from),
        None => Ok(None),
    }
}

impl CreatePropertyRequest {
    /// Coerce the numeric fields into a [`NewProperty`].
    ///
    /// Domain invariants are checked by the service on create.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::Validation`] when a numeric field does not
    /// parse.
    pub fn into_new_property(self) -> Result<NewProperty, ListingsError> {
        let price = numeric::parse_decimal("price", &self.price.as_text())?;
        let bedrooms = optional(
            self.bedrooms.as_ref().map(NumericField::as_count_text),
            |text| numeric::parse_optional_count("bedrooms", text),
        )?;
        let bathrooms = optional(
            self.bathrooms.as_ref().map(NumericField::as_count_text),
            |text| numeric::parse_optional_count("bathrooms", text),
        )?;
        let size = optional(self.size.as_ref().map(NumericField::as_text), |text| {
            numeric::parse_optional_decimal("size", text)
        })?;

        Ok(NewProperty {
            title: self.title,
            location: self.location,
            price,
            status: self.status,
            description: self.description,
            property_type: self.property_type,
            bedrooms,
            bathrooms,
            size,
        })
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Property>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoints.
pub enum CreateResponse {
    Created(Json<Property>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/properties`
pub async fn list<PR>(State(state): State<AppState<PR>>) -> Result<ListResponse, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
{
    let properties = state
        .property_service
        .list_properties()
        .await
        .map_err(ApiError::with_message(FETCH_FAILED))?;
    Ok(ListResponse::Ok(Json(properties)))
}

/// `POST /api/properties`
pub async fn create<PR>(
    State(state): State<AppState<PR>>,
    payload: Result<Json<CreatePropertyRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
{
    insert(&state, payload, CREATE_FAILED).await
}

/// `POST /api/add-property`
pub async fn add<PR>(
    State(state): State<AppState<PR>>,
    payload: Result<Json<CreatePropertyRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
{
    insert(&state, payload, ADD_FAILED).await
}

async fn insert<PR>(
    state: &AppState<PR>,
    payload: Result<Json<CreatePropertyRequest>, JsonRejection>,
    message: &'static str,
) -> Result<CreateResponse, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let property = req
        .into_new_property()
        .map_err(ApiError::with_message(message))?;
    let created = state
        .property_service
        .create_property(property)
        .await
        .map_err(ApiError::with_message(message))?;
    Ok(CreateResponse::Created(Json(created)))
}
