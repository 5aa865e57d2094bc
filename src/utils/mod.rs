pub mod calculator;
pub mod commands;
pub mod config;
pub mod entries;
pub mod report;
