//! Repository tests backed by in-memory SQLite.

mod comment;
mod diary;
mod likes;
mod mate;
mod notification;
mod user;
