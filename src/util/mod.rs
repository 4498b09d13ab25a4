pub mod clock;
pub mod format;
pub mod jwt;
pub mod observable;
pub mod storage;
pub mod validate;
