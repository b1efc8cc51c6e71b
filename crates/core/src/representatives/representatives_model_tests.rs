//! Tests for sales representative domain models.

use crate::representatives::{NewSalesRep, SalesRep, SalesRepUpdate};

fn new_rep(first: &str, last: &str, email: &str) -> NewSalesRep {
    NewSalesRep {
        id: None,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        is_eligible: true,
    }
}

#[test]
fn test_new_rep_validates() {
    assert!(new_rep("Dana", "Alvarez", "dana@freightline.test")
        .validate()
        .is_ok());
}

#[test]
fn test_new_rep_rejects_empty_name() {
    let rep = new_rep("", "  ", "dana@freightline.test");
    assert!(rep.validate().is_err());
}

#[test]
fn test_new_rep_rejects_missing_email() {
    let rep = new_rep("Dana", "Alvarez", "  ");
    assert!(rep.validate().is_err());
}

#[test]
fn test_new_rep_rejects_malformed_email() {
    let rep = new_rep("Dana", "Alvarez", "not-an-email");
    assert!(rep.validate().is_err());
}

#[test]
fn test_update_requires_id() {
    let update = SalesRepUpdate {
        id: "".to_string(),
        first_name: "Dana".to_string(),
        last_name: "Alvarez".to_string(),
        email: "dana@freightline.test".to_string(),
        is_eligible: false,
    };
    assert!(update.validate().is_err());
}

#[test]
fn test_display_name_trims_parts() {
    let rep = SalesRep {
        first_name: " Dana ".to_string(),
        last_name: "Alvarez".to_string(),
        ..Default::default()
    };
    assert_eq!(rep.display_name(), "Dana Alvarez");

    let single = SalesRep {
        first_name: "Dana".to_string(),
        last_name: "".to_string(),
        ..Default::default()
    };
    assert_eq!(single.display_name(), "Dana");
}

#[test]
fn test_rep_serializes_camel_case() {
    let rep = new_rep("Dana", "Alvarez", "dana@freightline.test");
    let json = serde_json::to_string(&rep).unwrap();
    assert!(json.contains("\"firstName\""));
    assert!(json.contains("\"isEligible\""));
}
