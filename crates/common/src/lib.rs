//! Shared building blocks for the contact API workspace: logging setup and
//! the JSON envelope types returned by every endpoint.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::types::{ErrorBody, Health, WebResponse};

    #[test]
    fn health_type_ok() {
        let h = Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn envelope_wraps_payload_under_data() {
        let v = serde_json::to_value(WebResponse::new(true)).unwrap();
        assert_eq!(v, serde_json::json!({ "data": true }));
    }

    #[test]
    fn error_body_uses_errors_key() {
        let v = serde_json::to_value(ErrorBody::new("Contact is not found")).unwrap();
        assert_eq!(v, serde_json::json!({ "errors": "Contact is not found" }));
    }
}
