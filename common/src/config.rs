use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_RENDERER, report::Report};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub name: String,
    pub settings: Settings,
    pub reports: Vec<InnerReport>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Renderer executable; resolved through PATH.
    pub renderer: Option<String>,
    /// Directory holding the raw `.out` files; figures land next to them.
    pub results_dir: Option<String>,
    pub keep_intermediate: Option<bool>,
}

impl Settings {
    pub fn renderer(&self) -> &str {
        self.renderer.as_deref().unwrap_or(DEFAULT_RENDERER)
    }

    pub fn results_dir(&self) -> &Path {
        Path::new(self.results_dir.as_deref().unwrap_or("."))
    }

    pub fn keep_intermediate(&self) -> bool {
        self.keep_intermediate.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InnerReport {
    pub name: String,
    pub report: Box<dyn Report>,
}
