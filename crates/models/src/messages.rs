//! Human-readable messages carried in `ApiResponse::message`.

pub const NO_CUSTOMERS: &str = "No customers found";
pub const CUSTOMER_LIST: &str = "List of customers";
pub const CUSTOMER_DETAILS: &str = "Customer details";
pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";
pub const CUSTOMER_ADD: &str = "Customer added successfully";
pub const CUSTOMER_UPDATE: &str = "Customer updated successfully";
pub const CUSTOMER_DELETE: &str = "Customer deleted successfully";
pub const CUSTOMER_WITH_LOCATIONS: &str = "Customer has locations; delete them first";
pub const CUSTOMER_LOCATION_DELETE: &str = "Customer location deleted successfully";
pub const CUSTOMER_LOCATION_NOT_FOUND: &str = "Location not found for this customer";

pub const NO_LOCATIONS: &str = "No locations found";
pub const LOCATION_LIST: &str = "List of locations";
pub const LOCATION_DETAILS: &str = "Location details";
pub const LOCATION_NOT_FOUND: &str = "Location not found";
pub const LOCATION_ADD: &str = "Location added successfully";
pub const LOCATION_EXIST: &str = "Location already exists";
pub const LOCATION_UPDATE: &str = "Location updated successfully";
pub const LOCATION_ADDRESS_TAKEN: &str = "Another location already uses this address";
pub const LOCATION_DELETE: &str = "Location deleted successfully";

pub const DATA_FORMAT: &str = "Entered data is not in correct format";
pub const INTERNAL_ERROR: &str = "Internal server error";
