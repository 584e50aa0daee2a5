pub use cg_report::CgReport;
pub use fim_report::FimReport;

/// Touches each built-in report impl so the linker keeps its typetag
/// registration; without this, deserializing `type: CgReport` from a
/// config file fails with an unknown variant.
pub fn init_reports() {
    serde_json::to_string(&CgReport::default()).unwrap();
    serde_json::to_string(&FimReport::default()).unwrap();
}
