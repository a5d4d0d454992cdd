pub mod book;
pub mod class;
pub mod dispatch;
pub mod init;
pub mod link;
pub mod product;
pub mod shared;
