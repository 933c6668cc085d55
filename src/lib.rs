pub mod components;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
