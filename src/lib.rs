pub mod capabilities;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod log_store;
pub mod logging;
pub mod output;
pub mod registry;
pub mod search;
pub mod shell;
pub mod time_range;
pub mod tokenizer;

#[cfg(test)]
pub mod test_utils;
