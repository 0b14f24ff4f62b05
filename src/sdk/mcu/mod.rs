pub mod gpio;
pub mod register;
