//! SeaORM entities for the melodiary database schema.

pub mod prelude;

pub mod comment;
pub mod diary;
pub mod image;
pub mod likes;
pub mod mate;
pub mod music;
pub mod notification;
pub mod user;
pub mod weather;
