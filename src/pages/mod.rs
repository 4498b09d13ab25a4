pub mod admin_create_user;
pub mod admin_users;
pub mod analyst_dashboard;
pub mod dashboard;
pub mod login;
pub mod rm_create_client;
pub mod rm_credit_requests;
pub mod rm_dashboard;
