// src/data_input/mod.rs

pub mod column_mapping;
pub mod file_locator;
pub mod log_data;
pub mod log_parser;

// src/data_input/mod.rs
