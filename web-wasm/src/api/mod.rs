//! Backend endpoint clients

pub mod backend;

pub use backend::{analyze, translate, ApiError};
