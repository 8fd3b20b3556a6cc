use std::io::{self, Write};

use eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use taper_cli::app::{App, Flow};
use taper_cli::render;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A malformed node table is a build defect; refuse to start on one.
    let flowchart = taper_flowchart::alcohol::alcohol_withdrawal()
        .wrap_err("alcohol withdrawal flowchart failed validation")?;

    let mut app = App::new(flowchart);
    render::page(&app)?;

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        match app.dispatch(line.trim()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                tracing::warn!(error = %e, "command failed");
                println!("error: {e}");
            }
        }
    }

    Ok(())
}
