//! Text input shared by the container parsers

pub mod token_input;

pub use token_input::TokenInput;
