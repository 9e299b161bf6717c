pub mod common;
pub mod features;
pub mod format;
pub mod icon;
pub mod pages;
pub mod sections;

pub use icon::{Icon, icons};
