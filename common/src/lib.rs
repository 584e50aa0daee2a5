pub mod config;
pub mod render;
pub mod report;
pub mod table;

pub const DEFAULT_RENDERER: &str = "bargraph.pl";
