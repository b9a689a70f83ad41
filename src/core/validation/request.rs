//! Typed request payloads

use crate::core::error::{MAX_FIELD_LENGTH, ValidationError};
use crate::core::order::Order;
use crate::core::validation::validators::bounded_text;
use serde::{Deserialize, Serialize};

fn default_is_invoiced() -> bool {
    true
}

/// Body of `POST /orders/create`
///
/// Missing `name` or `description` decode as `None` and fail validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_is_invoiced")]
    pub is_invoiced: bool,
}

impl CreateOrderRequest {
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_invoiced: bool) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_invoiced,
        }
    }

    /// Check the name first, then the description
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !bounded_text(self.name.as_ref(), MAX_FIELD_LENGTH) {
            return Err(ValidationError::InvalidName {
                max: MAX_FIELD_LENGTH,
            });
        }

        if !bounded_text(self.description.as_ref(), MAX_FIELD_LENGTH) {
            return Err(ValidationError::InvalidDescription {
                max: MAX_FIELD_LENGTH,
            });
        }

        Ok(())
    }

    /// Validate and build the order to hand to a store
    pub fn into_order(self) -> Result<Order, ValidationError> {
        self.validate()?;

        Ok(Order::new(
            self.name.unwrap_or_default(),
            self.description.unwrap_or_default(),
            self.is_invoiced,
        ))
    }
}
