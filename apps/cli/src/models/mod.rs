pub mod application;
pub mod listing;
pub mod user;

pub use application::{Application, ApplicationStatus};
pub use listing::Listing;
pub use user::{Role, User};
