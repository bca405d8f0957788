//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, privacy checks, and the daily-post rule
//! - **Orchestration**: Coordinating repositories, storage presigning, and notifications
//! - **Transaction Management**: Running multi-step writes inside one transaction

pub mod access;
pub mod auth;
pub mod comment;
pub mod diary;
pub mod feed;
pub mod like;
pub mod mate;
pub mod notification;
pub mod user;
pub mod view;

use sea_orm::{DbErr, SqlErr};

use crate::error::AppError;

/// Maps a unique-index violation to a 409 with the given message; any other
/// database error passes through unchanged.
pub(crate) fn conflict_on_unique(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message.to_string()),
        _ => AppError::DbErr(err),
    }
}
