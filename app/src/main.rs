use clap::{Parser, Subcommand};
use common::{config::Config, render, report::ReportPaths};
use eyre::{Context, Result};
use tokio::fs::read_to_string;
use tracing::{debug, error};
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long)]
    log: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured reports and their input files
    Ls {
        #[arg(short, long, default_value = "config.yaml")]
        config_file: String,
    },
    /// Generate normalized tables and render figures
    Generate {
        #[arg(short, long, default_value = "config.yaml")]
        config_file: String,
        /// Keep the intermediate .perf tables instead of deleting them
        #[arg(long, default_value_t = false)]
        keep: bool,
    },
    /// Print the renderer commands that would run
    Print {
        #[arg(short, long, default_value = "config.yaml")]
        config_file: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let modules: &[&str] = &["common", "cg_report", "fim_report"];
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let args = Cli::parse();
    let file_appender = tracing_appender::rolling::never(".", "log.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let mut env_filter = EnvFilter::new(format!("perf_report={log_level}"));

    if !args.log.is_empty() {
        for log in &args.log {
            env_filter = env_filter.add_directive(log.parse()?);
        }
    }

    for module in modules {
        if !args.log.iter().any(|x| x.starts_with(module)) {
            env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .with(layer().with_writer(non_blocking))
        .init();

    default_reports::init_reports();

    match args.command {
        Commands::Ls { config_file } => list_reports(&config_file).await?,
        Commands::Generate { config_file, keep } => {
            if let Err(err) = generate(&config_file, keep).await {
                error!("{err:#?}");
                return Err(err);
            }
        }
        Commands::Print { config_file } => print_commands(&config_file).await?,
    };

    Ok(())
}

async fn load_config(config_file: &str) -> Result<Config> {
    let raw = read_to_string(config_file)
        .await
        .context(format!("Read {config_file}"))?;
    serde_yml::from_str(&raw).context(format!("Parse {config_file}"))
}

async fn generate(config_file: &str, keep: bool) -> Result<()> {
    let config = load_config(config_file).await?;
    let keep = keep || config.settings.keep_intermediate();
    for inner in &config.reports {
        debug!("Generating report {}", inner.name);
        common::report::generate(&*inner.report, &config.settings, keep).await?;
    }
    Ok(())
}

async fn list_reports(config_file: &str) -> Result<()> {
    let config = load_config(config_file).await?;
    for inner in &config.reports {
        for id in inner.report.ids() {
            let paths = ReportPaths::resolve(&*inner.report, config.settings.results_dir(), &id);
            let missing = if paths.input.exists() { "" } else { " (missing)" };
            println!("{} -> {}{missing}", inner.name, paths.input.display());
        }
    }
    Ok(())
}

async fn print_commands(config_file: &str) -> Result<()> {
    let config = load_config(config_file).await?;
    for inner in &config.reports {
        for id in inner.report.ids() {
            let paths = ReportPaths::resolve(&*inner.report, config.settings.results_dir(), &id);
            println!(
                "{}",
                render::command_line(config.settings.renderer(), &paths.table, &paths.figure)
            );
        }
    }
    Ok(())
}
