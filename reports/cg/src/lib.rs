use common::report::Report;
use serde::{Deserialize, Serialize};

const DEFAULT_THREADS: &[&str] = &["2", "4", "6", "8", "10", "12"];

const BOILERPLATE: &str = "\
=cluster;Cilk;OpenMP;PFunc
=noupperright
#=patterns
legendx=4000
legendy=800
yformat=%g%%
xlabel=Matrix Name
extraops=set yrange [60:]
ylabel=Runtime (Normalized to Cilk)
title=
=table";

/// Conjugate-gradient matrix benchmark report: one `cg_<threads>.out` file
/// per thread count, each line `<matrix> <cilk> <pfunc> <omp>`, runtimes
/// normalized to Cilk.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CgReport {
    pub threads: Option<Vec<String>>,
}

#[typetag::serde]
impl Report for CgReport {
    fn name(&self) -> &'static str {
        "cg"
    }

    fn file_prefix(&self) -> &'static str {
        "cg"
    }

    fn columns(&self) -> &'static [usize] {
        // cilk is the baseline; omp plots before pfunc to match the legend
        &[1, 3, 2]
    }

    fn boilerplate(&self) -> &'static str {
        BOILERPLATE
    }

    fn ids(&self) -> Vec<String> {
        match &self.threads {
            Some(threads) => threads.clone(),
            None => DEFAULT_THREADS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}
