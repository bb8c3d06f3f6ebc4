// src/plot_functions/mod.rs

pub mod chart_plan;
pub mod plot_elevation;
pub mod plot_speed;
pub mod plot_trajectory;

// src/plot_functions/mod.rs
