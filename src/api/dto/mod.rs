//! Data Transfer Objects for REST request/response serialization.

pub mod feedback_dto;
pub mod musician_dto;

pub use feedback_dto::*;
pub use musician_dto::*;
