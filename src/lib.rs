pub mod cli;
pub mod commands;
pub mod error;
pub mod paths;
pub mod switch;
pub mod themes;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
