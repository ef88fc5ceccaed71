pub mod item;
pub mod menu;
