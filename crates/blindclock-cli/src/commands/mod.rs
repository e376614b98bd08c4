pub mod config;
pub mod run;
pub mod schedule;
pub mod simulate;
