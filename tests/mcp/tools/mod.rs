mod config;
mod status;
mod translation;
