//! Command line driver for netscope: layered configuration, logging setup and the reports
//! printed by each subcommand.

pub mod commands;
pub mod config;
