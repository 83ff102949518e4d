pub mod canvas;
pub mod commands;
pub mod gesture;
pub mod parser;
