mod config;
mod content;
mod hero;
mod navigation;
mod render;
