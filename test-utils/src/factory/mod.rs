//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and `create_*` convenience functions for quick default
//! creation. Factories handle foreign keys for you, keeping tests concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let diary = factory::diary::create_diary(&db, user.id).await?;
//!
//!     // Customize through the builder
//!     let diary = factory::diary::DiaryFactory::new(&db, user.id)
//!         .privacy(entity::diary::Privacy::Mate)
//!         .title("Rainy day")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod comment;
pub mod diary;
pub mod helpers;
pub mod likes;
pub mod mate;
pub mod music;
pub mod notification;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use comment::create_comment;
pub use diary::create_diary;
pub use likes::create_like;
pub use mate::{create_accepted_mate, create_mate_request};
pub use music::create_music;
pub use notification::create_notification;
pub use user::create_user;
