//! AQI computation
//!
//! Converts pollutant concentrations into AQI values:
//! - Breakpoint tables for PM2.5, PM10 and O3
//! - Single-pollutant sub-index interpolation
//! - Composite AQI resolution with contributing-pollutant attribution

pub mod breakpoints;
pub mod calculator;
pub mod composite;

pub use breakpoints::{BreakpointRow, BreakpointTable, O3_TABLE, PM10_TABLE, PM25_TABLE};
pub use calculator::compute_sub_index;
pub use composite::{composite_from_samples, compute_composite_aqi, sub_indices};
