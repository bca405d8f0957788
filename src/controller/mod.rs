pub mod auth;
pub mod comment;
pub mod diary;
pub mod feed;
pub mod like;
pub mod mate;
pub mod notification;
pub mod storage;
pub mod user;
