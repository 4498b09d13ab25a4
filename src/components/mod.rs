pub mod client_details_dialog;
pub mod credit_request_dialog;
pub mod decision_dialog;
pub mod guarded;
pub mod layout;
pub mod nav_bridge;
pub mod stat_card;
pub mod toast_stack;
