pub mod abi;
pub mod config;
pub mod feed;
pub mod runner;
pub mod utils;
