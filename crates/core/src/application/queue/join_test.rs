//! Unit tests for join validation

use super::join::{build_client, validate_request, JoinRequest};
use crate::domain::client::ServiceType;
use crate::domain::error::QueueError;
use crate::port::Clock;

struct FixedClock(&'static str);

impl Clock for FixedClock {
    fn today(&self) -> String {
        self.0.to_string()
    }
}

fn request(name: &str, service_type: &str) -> JoinRequest {
    JoinRequest {
        name: name.to_string(),
        service_type: service_type.to_string(),
        entry_date: None,
    }
}

#[test]
fn rejects_empty_name() {
    let result = validate_request(&request("", "N"));
    assert!(matches!(result, Err(QueueError::InvalidName(_))));
}

#[test]
fn rejects_name_over_twenty_characters() {
    let result = validate_request(&request(&"a".repeat(21), "N"));
    assert!(matches!(result, Err(QueueError::InvalidName(_))));
}

#[test]
fn accepts_name_of_exactly_twenty_characters() {
    let result = validate_request(&request(&"a".repeat(20), "N"));
    assert_eq!(result.unwrap(), ServiceType::Normal);
}

#[test]
fn name_length_is_measured_in_characters() {
    // 20 accented characters, more than 20 bytes in UTF-8.
    let result = validate_request(&request(&"é".repeat(20), "P"));
    assert_eq!(result.unwrap(), ServiceType::Priority);
}

#[test]
fn rejects_unknown_service_type() {
    let result = validate_request(&request("Ana", "X"));
    assert_eq!(
        result.unwrap_err(),
        QueueError::InvalidServiceType("X".to_string())
    );
}

#[test]
fn stamps_entry_date_when_omitted() {
    let client = build_client(request("Ana", "N"), &FixedClock("01/01/2025")).unwrap();
    assert_eq!(client.entry_date, "01/01/2025");
    assert!(!client.attended);
}

#[test]
fn keeps_provided_entry_date_verbatim() {
    let mut req = request("Ana", "N");
    req.entry_date = Some("not even a date".to_string());

    let client = build_client(req, &FixedClock("01/01/2025")).unwrap();
    assert_eq!(client.entry_date, "not even a date");
}
