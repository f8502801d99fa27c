pub mod config;
pub mod error;
pub mod handlers;
pub mod processor;
pub mod telemetry;

#[cfg(test)]
mod tests;
