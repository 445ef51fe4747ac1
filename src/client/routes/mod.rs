pub mod about;
pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod not_found;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
