// gemvision - Image analysis over HTTP, backed by Gemini
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod server;
pub mod translation;
pub mod utils;
pub mod vision;
