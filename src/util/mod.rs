pub mod nickname;
