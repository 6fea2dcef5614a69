// File: ./src/model/mod.rs
pub mod fields;
pub mod index;
pub mod item;
pub mod matcher;

pub use fields::{Address, Email, EventDate, Name, Phone, Position, TaskName};
pub use index::Index;
pub use item::{Event, Member, Task};
pub use matcher::NameContainsKeywords;
