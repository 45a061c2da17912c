//! Pages
//!
//! One component per route.

mod landing;
mod login;
mod not_found;
mod tasks;

pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use tasks::TasksPage;
