pub mod args;
pub mod demo;
pub mod greetings;
pub mod handle_error;
pub mod quote;
