use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ModelError;
use crate::location::{self, Location};

pub type CustomerId = i64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Assigned by the store; ignored on create.
    #[serde(default)]
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    /// Missing and `null` both mean "no locations".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locations: Vec<Location>,
}

impl Customer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            locations: Vec::new(),
        }
    }

    pub fn with_location(mut self, address: impl Into<String>) -> Self {
        self.locations.push(Location::new(address));
        self
    }

    pub fn has_location(&self, location_id: location::LocationId) -> bool {
        self.locations.iter().any(|l| l.id == location_id)
    }

    pub fn normalized(self) -> Self {
        Self {
            id: self.id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            locations: self.locations.into_iter().map(Location::normalized).collect(),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn validate_name(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

pub fn validate(customer: &Customer) -> Result<(), ModelError> {
    validate_name("firstName", &customer.first_name)?;
    validate_name("lastName", &customer.last_name)?;
    for loc in &customer.locations {
        location::validate(loc)?;
    }
    Ok(())
}
