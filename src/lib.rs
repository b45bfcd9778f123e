//! Backend-driven UI: decode JSON screen descriptions, map them to a
//! toolkit-independent render tree and route their actions to the host.

pub mod action;
pub mod config;
pub mod demos;
pub mod loader;
pub mod logging;
pub mod mapper;
pub mod render;
pub mod schema;
pub mod ui;
