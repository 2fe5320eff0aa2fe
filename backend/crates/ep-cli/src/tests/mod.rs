mod error;
mod runner;
