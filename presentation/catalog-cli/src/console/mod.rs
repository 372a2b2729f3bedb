pub mod command;
pub mod error_mapper;
pub mod render;
