//! Test data factories for creating valid fixtures.
//!
//! Each factory creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use crate::use_cases::school::SignupRequest;

/// Create a valid signup request with sensible defaults.
pub fn create_test_signup(overrides: impl FnOnce(&mut SignupRequest)) -> SignupRequest {
    let mut req = SignupRequest {
        school_name: "Greenfield College".to_string(),
        email: "registrar@greenfield.edu".to_string(),
        phone_number: "08012345678".to_string(),
        contact_address: "12 Main Street, Lagos".to_string(),
        admin_name: "Jane Doe".to_string(),
        password: "pw123456".to_string(),
        password_confirm: "pw123456".to_string(),
    };
    overrides(&mut req);
    req
}
