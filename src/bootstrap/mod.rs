//! Process bootstrap helpers.

pub mod logger;
