//! Pieces shared by every crate in the workspace: logging setup and the
//! small response types that are not tied to customers or locations.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status() {
        let h = types::Health { status: "ok" };
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }
}
