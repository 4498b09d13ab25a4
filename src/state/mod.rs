//! Client-side state containers shared through Leptos context.

pub mod auth;
pub mod notify;
pub mod profile;
pub mod session;
pub mod token;
