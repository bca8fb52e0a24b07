pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod tui;
pub mod util;
