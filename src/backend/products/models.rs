/**
 * Product Models
 *
 * The stored product record and the request bodies that create or change it.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// Product owned by a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    /// Owner; every query is scoped by it
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /products` and `PUT /products/{id}`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ProductRequest {
    #[validate(required, length(min = 2))]
    pub name: Option<String>,
    #[validate(required, range(exclusive_min = 0.0, code = "gt"))]
    pub price: Option<f64>,
}

impl ProductRequest {
    /// Name and price once validation has passed
    pub fn into_parts(self) -> Option<(String, f64)> {
        Some((self.name?, self.price?))
    }
}

/// Body of `PATCH /products/{id}`; at least one field must be present
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PatchProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl PatchProductRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

impl Validate for PatchProductRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.is_empty() {
            errors.add("name", ValidationError::new("required_without_all"));
            errors.add("price", ValidationError::new("required_without_all"));
            return Err(errors);
        }

        if let Some(name) = &self.name {
            if name.chars().count() < 2 {
                let mut error = ValidationError::new("length");
                error.add_param("min".into(), &2);
                errors.add("name", error);
            }
        }

        if let Some(price) = self.price {
            if price <= 0.0 {
                errors.add("price", ValidationError::new("gt"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
