// src/font_config.rs

// Font styles for chart text, kept in one place so every chart renders
// titles, axis descriptions and tick labels identically.

use crate::constants::{FONT_SIZE_AXIS_DESC, FONT_SIZE_CHART_TITLE, FONT_SIZE_TICK_LABEL};

/// Font family name for default system fonts
/// When plotters renders with "sans-serif", it uses system fonts
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

// Tuple representations for use with plotters' IntoFont trait
pub const FONT_TUPLE_CHART_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_CHART_TITLE);
pub const FONT_TUPLE_AXIS_DESC: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_AXIS_DESC);
pub const FONT_TUPLE_TICK_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_TICK_LABEL);

// src/font_config.rs
