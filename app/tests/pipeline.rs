use std::{fs, path::Path};

use cg_report::CgReport;
use common::{
    config::{Config, Settings},
    report::generate,
};
use fim_report::FimReport;
use tempfile::TempDir;

// `cat` stands in for the real renderer: it copies the table to stdout,
// which the pipeline captures into the figure file.
fn settings(dir: &TempDir, renderer: &str) -> Settings {
    Settings {
        renderer: Some(renderer.to_owned()),
        results_dir: Some(dir.path().to_str().unwrap().to_owned()),
        keep_intermediate: None,
    }
}

fn cg_report(threads: &[&str]) -> CgReport {
    CgReport {
        threads: Some(threads.iter().map(|s| (*s).to_owned()).collect()),
    }
}

#[tokio::test]
async fn generates_one_figure_per_thread_count() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cg_2.out"), "mat1 2.0 3.0 4.0\nmat2 4.0 3.0 2.0\n").unwrap();
    fs::write(dir.path().join("cg_4.out"), "mat1 1.0 1.0 1.0\n").unwrap();

    generate(&cg_report(&["2", "4"]), &settings(&dir, "cat"), false)
        .await
        .unwrap();

    let figure = fs::read_to_string(dir.path().join("cg_2.eps")).unwrap();
    assert!(figure.starts_with("=cluster;Cilk;OpenMP;PFunc\n"));
    assert!(figure.ends_with("=table\n\nmat1 100.0 200.0 150.0\nmat2 100.0 50.0 75.0\n"));
    assert!(dir.path().join("cg_4.eps").exists());

    // intermediate tables are deleted after rendering
    assert!(!dir.path().join("cg_2.perf").exists());
    assert!(!dir.path().join("cg_4.perf").exists());
}

#[tokio::test]
async fn keep_flag_retains_intermediate_tables() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cg_2.out"), "mat1 2.0 3.0 4.0\n").unwrap();

    generate(&cg_report(&["2"]), &settings(&dir, "cat"), true)
        .await
        .unwrap();

    let table = fs::read_to_string(dir.path().join("cg_2.perf")).unwrap();
    let figure = fs::read_to_string(dir.path().join("cg_2.eps")).unwrap();
    assert_eq!(table, figure);
}

#[tokio::test]
async fn missing_input_aborts_without_processing_later_ids() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cg_2.out"), "mat1 2.0 3.0 4.0\n").unwrap();

    let err = generate(&cg_report(&["2", "4", "6"]), &settings(&dir, "cat"), false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("cg_4.out"));

    assert!(dir.path().join("cg_2.eps").exists());
    assert!(!dir.path().join("cg_4.eps").exists());
    assert!(!dir.path().join("cg_6.eps").exists());
}

#[tokio::test]
async fn malformed_row_aborts_before_writing_a_table() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("fim_8.out"), "chess 1 oops 6.0\n").unwrap();

    let report = FimReport { sizes: None };
    let err = generate(&report, &settings(&dir, "cat"), false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("fim_8.out"));
    assert!(!dir.path().join("fim_8.perf").exists());
    assert!(!dir.path().join("fim_8.eps").exists());
}

#[tokio::test]
async fn failing_renderer_is_not_fatal_and_cleanup_still_runs() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cg_2.out"), "mat1 2.0 3.0 4.0\n").unwrap();

    generate(&cg_report(&["2"]), &settings(&dir, "false"), false)
        .await
        .unwrap();

    assert!(!dir.path().join("cg_2.perf").exists());
    // the figure file is created before the renderer runs, but stays empty
    assert_eq!(fs::metadata(dir.path().join("cg_2.eps")).unwrap().len(), 0);
}

#[tokio::test]
async fn missing_renderer_is_not_fatal_and_cleanup_still_runs() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cg_2.out"), "mat1 2.0 3.0 4.0\nmat2 4.0 3.0 2.0\n").unwrap();
    fs::write(dir.path().join("cg_4.out"), "mat1 1.0 1.0 1.0\n").unwrap();

    generate(
        &cg_report(&["2", "4"]),
        &settings(&dir, "renderer-that-does-not-exist"),
        false,
    )
    .await
    .unwrap();

    // both ids still processed, both tables deleted
    assert!(!dir.path().join("cg_2.perf").exists());
    assert!(!dir.path().join("cg_4.perf").exists());
}

#[tokio::test]
async fn parses_tagged_reports_from_yaml_config() {
    default_reports::init_reports();

    let config: Config = serde_yml::from_str(
        r#"
name: sc-paper-figures
settings:
  renderer: bargraph.pl
reports:
  - name: cg-runtime
    report:
      type: CgReport
  - name: fim-runtime
    report:
      type: FimReport
      sizes: ["4", "8"]
"#,
    )
    .unwrap();

    assert_eq!(config.settings.renderer(), "bargraph.pl");
    assert_eq!(config.settings.results_dir(), Path::new("."));
    assert_eq!(config.reports[0].report.ids().len(), 6);
    assert_eq!(config.reports[1].report.ids(), ["4", "8"]);
}
