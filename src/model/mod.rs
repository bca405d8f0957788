//! Request and response DTOs.
//!
//! Serde types crossing the HTTP boundary. Entity models are converted to
//! these at the service layer; raw storage keys are replaced with presigned
//! URLs before anything leaves a service.

pub mod api;
pub mod comment;
pub mod diary;
pub mod mate;
pub mod notification;
pub mod user;
