pub mod bin_constants;
pub mod config;
pub mod data;
pub mod logging;
pub mod payload;
pub mod rng;
pub mod storage;
pub mod username_string;
pub mod util;
mod lib_constants;
