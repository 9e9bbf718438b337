pub mod banner;
pub mod cli;
pub mod logging;
pub mod runtime;
pub mod versioning;
