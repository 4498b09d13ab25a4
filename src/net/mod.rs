pub mod api;
pub mod http;
pub mod interceptor;
pub mod types;
