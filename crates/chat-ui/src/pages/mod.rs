pub mod account;
pub mod login;
pub mod register;
pub mod users;
