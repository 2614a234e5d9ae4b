mod config;
mod echo_serialization;
mod relay;
