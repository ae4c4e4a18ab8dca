pub mod config;
pub mod console;
pub mod generator;
pub mod logger;
pub mod parse;
pub mod profiler;
