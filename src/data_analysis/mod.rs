// src/data_analysis/mod.rs

pub mod kinematics;

// src/data_analysis/mod.rs
