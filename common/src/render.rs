use std::{fs::File, path::Path, process::Stdio};

use eyre::{Context, Result};
use tokio::process::Command;
use tracing::{debug, warn};

/// The command line for one renderer invocation, as it would be typed in a
/// shell. Echoed before running and used by the `print` subcommand.
pub fn command_line(renderer: &str, table: &Path, figure: &Path) -> String {
    format!("{renderer} {} > {}", table.display(), figure.display())
}

/// Runs the renderer with the table path as its single argument, capturing
/// its stdout into the figure file. The invocation is structured (program
/// plus argument list), never a shell string, so paths need no escaping.
/// Renderer failures of any kind (missing executable, unwritable figure
/// file, non-zero exit) are reported but never fatal; the caller cleans up
/// the table regardless.
pub async fn render(renderer: &str, table: &Path, figure: &Path) {
    println!("{}", command_line(renderer, table, figure));

    if let Err(err) = run_renderer(renderer, table, figure).await {
        warn!("Renderer {renderer} failed for {}: {err:#}", table.display());
    }
}

async fn run_renderer(renderer: &str, table: &Path, figure: &Path) -> Result<()> {
    let figure_file =
        File::create(figure).context(format!("Create figure file {}", figure.display()))?;
    let status = Command::new(renderer)
        .arg(table)
        .stdout(Stdio::from(figure_file))
        .spawn()
        .context(format!("Spawn renderer {renderer}"))?
        .wait()
        .await?;

    if !status.success() {
        warn!(
            "Renderer {renderer} exited with {status} for {}",
            table.display()
        );
    } else {
        debug!("Rendered {}", figure.display());
    }
    Ok(())
}
