pub mod commands;
pub mod replay;
