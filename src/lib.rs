pub mod advisor;
pub mod api;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod conversation;
pub mod core;
pub mod render;
pub mod selection;
