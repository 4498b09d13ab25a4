//! Display formatting shared by tables and stat cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::CreditStatus;

/// Whole rupees with Indian digit grouping, e.g. `₹12,34,567`.
#[allow(clippy::cast_possible_truncation)]
pub fn inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0".to_owned();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{}", rounded.abs() as u64);
    format!("{sign}₹{}", group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// CSS modifier for a status chip. Missing status renders as pending.
pub fn status_class(status: Option<CreditStatus>) -> &'static str {
    match status.unwrap_or_default() {
        CreditStatus::Pending => "status-pending",
        CreditStatus::Approved => "status-approved",
        CreditStatus::Rejected => "status-rejected",
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
