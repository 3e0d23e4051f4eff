pub mod commands;
pub mod domain;
pub mod services;
