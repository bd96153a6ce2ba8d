pub mod assets;
pub mod auth;
pub mod contacts;
pub mod projects;
pub mod user;
