//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories are generic over SeaORM's `ConnectionTrait`, so
//! the same query code runs against the pooled connection or inside a transaction handle.
//! All database queries, inserts, updates, and deletes are performed through these
//! repositories.

pub mod comment;
pub mod diary;
pub mod likes;
pub mod mate;
pub mod notification;
pub mod user;

#[cfg(test)]
mod test;
