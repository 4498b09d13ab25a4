use super::*;

#[test]
fn inr_groups_lakhs_and_crores() {
    assert_eq!(inr(0.0), "₹0");
    assert_eq!(inr(999.0), "₹999");
    assert_eq!(inr(1000.0), "₹1,000");
    assert_eq!(inr(100_000.0), "₹1,00,000");
    assert_eq!(inr(12_345_678.0), "₹1,23,45,678");
}

#[test]
fn inr_rounds_to_whole_rupees() {
    assert_eq!(inr(1499.5), "₹1,500");
    assert_eq!(inr(-2500.0), "-₹2,500");
    assert_eq!(inr(f64::NAN), "₹0");
}

#[test]
fn status_class_defaults_to_pending() {
    assert_eq!(status_class(None), "status-pending");
    assert_eq!(status_class(Some(CreditStatus::Approved)), "status-approved");
    assert_eq!(status_class(Some(CreditStatus::Rejected)), "status-rejected");
}
