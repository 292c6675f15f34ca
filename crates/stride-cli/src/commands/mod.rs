pub mod chat;
pub mod laurels;
pub mod progress;
