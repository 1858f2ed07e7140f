mod config;
mod input;
mod round;
