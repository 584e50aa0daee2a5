use common::report::Report;
use serde::{Deserialize, Serialize};

const DEFAULT_SIZES: &[&str] = &["8"];

const BOILERPLATE: &str = "\
=cluster;Cilk-style;Clustered
=noupperright
#=patterns
legendx=4000
legendy=800
yformat=%g%%
xlabel=Database Name
extraops=set yrange [0:]
ylabel=Runtime (Normalized to Cilk-style)
title=
=table";

/// Frequent-itemset-mining database benchmark report: `fim_<size>.out`
/// files where only the third and fourth tokens of each line are plotted,
/// clustered runtime normalized to the Cilk-style scheduler.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FimReport {
    pub sizes: Option<Vec<String>>,
}

#[typetag::serde]
impl Report for FimReport {
    fn name(&self) -> &'static str {
        "fim"
    }

    fn file_prefix(&self) -> &'static str {
        "fim"
    }

    fn columns(&self) -> &'static [usize] {
        &[2, 3]
    }

    fn boilerplate(&self) -> &'static str {
        BOILERPLATE
    }

    fn ids(&self) -> Vec<String> {
        match &self.sizes {
            Some(sizes) => sizes.clone(),
            None => DEFAULT_SIZES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size() {
        assert_eq!(FimReport::default().ids(), ["8"]);
    }

    #[test]
    fn skips_first_measurement_token() {
        let table =
            common::report::build_table(&FimReport::default(), "chess 99.9 4.0 6.0\n").unwrap();
        assert!(table.ends_with("=table\n\nchess 100.0 150.0\n"));
    }

    #[test]
    fn deserializes_from_tagged_config() {
        let report: Box<dyn Report> =
            serde_json::from_str(r#"{"type": "FimReport", "sizes": ["4", "8"]}"#).unwrap();
        assert_eq!(report.name(), "fim");
        assert_eq!(report.ids(), ["4", "8"]);
    }
}
