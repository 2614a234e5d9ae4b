pub mod config;
pub mod lambda_structure;
pub mod result;
pub mod webhook;
