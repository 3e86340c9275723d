use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub type LocationId = i64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Assigned by the store; ignored on create.
    #[serde(default)]
    pub id: LocationId,
    pub address: String,
}

impl Location {
    pub fn new(address: impl Into<String>) -> Self {
        Self { id: 0, address: address.into() }
    }

    /// Case-insensitive address comparison used for de-duplication.
    pub fn has_address(&self, address: &str) -> bool {
        address_key(&self.address) == address_key(address)
    }

    pub fn normalized(mut self) -> Self {
        self.address = self.address.trim().to_string();
        self
    }
}

/// Key under which two addresses are considered the same location.
pub fn address_key(address: &str) -> String {
    address.trim().to_lowercase()
}

pub fn validate_address(address: &str) -> Result<(), ModelError> {
    if address.trim().is_empty() {
        return Err(ModelError::Validation("address required".into()));
    }
    Ok(())
}

pub fn validate(location: &Location) -> Result<(), ModelError> {
    validate_address(&location.address)
}
