use anyhow::Result;
use serde_json::json;

use crate::errors::ModelError;
use crate::{customer, location, Customer, Location};

#[test]
fn customer_deserializes_camel_case_with_defaults() -> Result<()> {
    let c: Customer = serde_json::from_value(json!({
        "firstName": "Ada",
        "lastName": "Lovelace"
    }))?;
    assert_eq!(c.id, 0);
    assert_eq!(c.first_name, "Ada");
    assert!(c.locations.is_empty());
    Ok(())
}

#[test]
fn null_locations_become_empty() -> Result<()> {
    let c: Customer = serde_json::from_value(json!({
        "id": 3,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "locations": null
    }))?;
    assert_eq!(c.id, 3);
    assert!(c.locations.is_empty());
    Ok(())
}

#[test]
fn embedded_locations_keep_order() -> Result<()> {
    let c: Customer = serde_json::from_value(json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "locations": [{"address": "Main St"}, {"id": 9, "address": "Side Rd"}]
    }))?;
    let addresses: Vec<_> = c.locations.iter().map(|l| l.address.as_str()).collect();
    assert_eq!(addresses, ["Main St", "Side Rd"]);
    assert_eq!(c.locations[1].id, 9);
    Ok(())
}

#[test]
fn missing_first_name_is_rejected_by_serde() {
    let res: Result<Customer, _> = serde_json::from_value(json!({"lastName": "Lovelace"}));
    assert!(res.is_err());
}

#[test]
fn serializes_camel_case() -> Result<()> {
    let c = Customer::new("Ada", "Lovelace").with_location("Main St");
    let v = serde_json::to_value(&c)?;
    assert_eq!(
        v,
        json!({
            "id": 0,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "locations": [{"id": 0, "address": "Main St"}]
        })
    );
    Ok(())
}

#[test]
fn validation_requires_names_and_addresses() {
    assert!(customer::validate(&Customer::new("Ada", "Lovelace")).is_ok());
    assert_eq!(
        customer::validate(&Customer::new(" ", "Lovelace")),
        Err(ModelError::Validation("firstName required".into()))
    );
    assert_eq!(
        customer::validate(&Customer::new("Ada", "")),
        Err(ModelError::Validation("lastName required".into()))
    );
    assert!(customer::validate(&Customer::new("Ada", "Lovelace").with_location("  ")).is_err());
    assert!(location::validate(&Location::new("")).is_err());
}

#[test]
fn address_match_ignores_case_and_padding() {
    let loc = Location::new("Main St");
    assert!(loc.has_address("main st"));
    assert!(loc.has_address("  MAIN ST "));
    assert!(!loc.has_address("Main Street"));
}

#[test]
fn normalized_trims_fields() {
    let c = Customer::new(" Ada ", "Lovelace\t").with_location(" Main St ").normalized();
    assert_eq!(c.first_name, "Ada");
    assert_eq!(c.last_name, "Lovelace");
    assert_eq!(c.locations[0].address, "Main St");
}
