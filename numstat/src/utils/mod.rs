pub mod input;
pub mod settings;
