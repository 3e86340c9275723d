//! Service layer owning the customer and location collections.
//! - `customer_location::repository` defines the store contract and its outcomes.
//! - `customer_location::memory` keeps both collections behind one lock.
//! - `customer_location::service` validates candidates and logs decisions.

pub mod errors;
pub mod customer_location;
