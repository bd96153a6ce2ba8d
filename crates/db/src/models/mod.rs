pub mod admin_user;
pub mod contact;
pub mod project;
