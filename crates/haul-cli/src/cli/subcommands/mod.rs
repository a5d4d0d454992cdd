mod book;
mod class;
mod link;
mod product;

pub use book::{BookCommands, BookPlanArgs};
pub use class::{ClassAddArgs, ClassCommands, ClassUpdateArgs};
pub use link::{LinkApplyArgs, LinkCommands};
pub use product::ProductCommands;
