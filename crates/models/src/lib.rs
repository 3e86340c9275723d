//! Entities exchanged between the store and its HTTP adapter.
//! - `Customer` embeds copies of the `Location`s it references.
//! - `ApiResponse` is the envelope every API response is wrapped in.

pub mod errors;
pub mod customer;
pub mod location;
pub mod response;
pub mod messages;

pub use customer::Customer;
pub use location::Location;
pub use response::ApiResponse;

#[cfg(test)]
mod tests;
