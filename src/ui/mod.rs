pub mod mvi;
pub mod navigator;
pub mod screen;
pub mod session;
