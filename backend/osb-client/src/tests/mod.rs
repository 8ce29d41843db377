mod config;
mod gate;
mod version;
