pub use super::comment::Entity as Comment;
pub use super::diary::Entity as Diary;
pub use super::image::Entity as Image;
pub use super::likes::Entity as Likes;
pub use super::mate::Entity as Mate;
pub use super::music::Entity as Music;
pub use super::notification::Entity as Notification;
pub use super::user::Entity as User;
pub use super::weather::Entity as Weather;
