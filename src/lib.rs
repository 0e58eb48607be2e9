pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod lexer;
pub mod mask;
pub mod normalize;
pub mod render;
pub mod shorten;
pub mod token;
