use core::fmt::Debug;
use std::path::{Path, PathBuf};

use dyn_clone::{DynClone, clone_trait_object};
use eyre::{Context, Result};
use tokio::fs::{read_to_string, remove_file, write};
use tracing::debug;

use crate::{
    config::Settings,
    render,
    table::{format_row, parse_rows},
};

/// One report variant: a family of benchmark output files sharing a naming
/// convention, a column layout, and a chart boilerplate.
#[typetag::serde(tag = "type")]
pub trait Report: Debug + DynClone + Send + Sync {
    fn name(&self) -> &'static str;
    /// File name prefix; files are `<prefix>_<id>.{out,perf,eps}`.
    fn file_prefix(&self) -> &'static str;
    /// Token indices selected from each input line, baseline first, in the
    /// order the columns appear in the rendered chart.
    fn columns(&self) -> &'static [usize];
    /// Directive block the renderer reads ahead of the data table.
    fn boilerplate(&self) -> &'static str;
    /// The configuration identifiers to process, in order.
    fn ids(&self) -> Vec<String>;
}
clone_trait_object!(Report);

/// The three per-identifier file paths derived from the naming convention.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPaths {
    pub input: PathBuf,
    pub table: PathBuf,
    pub figure: PathBuf,
}

impl ReportPaths {
    pub fn resolve(report: &dyn Report, dir: &Path, id: &str) -> Self {
        let prefix = report.file_prefix();
        Self {
            input: dir.join(format!("{prefix}_{id}.out")),
            table: dir.join(format!("{prefix}_{id}.perf")),
            figure: dir.join(format!("{prefix}_{id}.eps")),
        }
    }
}

/// Builds the intermediate table text: boilerplate, a blank separator
/// line, then one normalized row per input row.
pub fn build_table(report: &dyn Report, data: &str) -> Result<String> {
    let rows = parse_rows(data, report.columns())?;
    let mut out = String::from(report.boilerplate());
    out.push_str("\n\n");
    for row in &rows {
        out.push_str(&format_row(&row.label, &row.normalize()?));
        out.push('\n');
    }
    Ok(out)
}

/// Processes every identifier of one report in order: read the raw output
/// file, normalize it, write the `.perf` table, render the figure, delete
/// the table. A missing or malformed input aborts the run; identifiers
/// after it are not processed. The table survives only when `keep` is set.
pub async fn generate(report: &dyn Report, settings: &Settings, keep: bool) -> Result<()> {
    for id in report.ids() {
        let paths = ReportPaths::resolve(report, settings.results_dir(), &id);
        debug!("Generating {} for id {id}", report.name());

        let data = read_to_string(&paths.input)
            .await
            .context(format!("Read {}", paths.input.display()))?;
        let table = build_table(report, &data)
            .context(format!("Normalize {}", paths.input.display()))?;
        write(&paths.table, table)
            .await
            .context(format!("Write {}", paths.table.display()))?;

        render::render(settings.renderer(), &paths.table, &paths.figure).await;

        if !keep {
            remove_file(&paths.table)
                .await
                .context(format!("Remove {}", paths.table.display()))?;
        }
    }
    Ok(())
}
