//! Application pages
//!
//! - Landing page (home)
//! - Not found page

mod landing;
mod not_found;

pub use landing::{LandingPage, structured_data};
pub use not_found::NotFoundPage;
