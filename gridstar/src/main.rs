//! Terminal A* visualizer.
//!
//! Run: cargo run --bin gridstar -- --rows 30
//!
//! Logs go nowhere unless RUST_LOG is set; use --log-file to keep them out
//! of the terminal UI:
//!   RUST_LOG=debug cargo run --bin gridstar -- --log-file gridstar.log

use std::error::Error;
use std::fs::File;
use std::path::Path;

use clap::Parser;
use gridstar_crossterm::{CrosstermDriver, required_size};
use gridstar_lib::{App, Args, Session};

fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = init_logging(args.log_file.as_deref()) {
        eprintln!("Error: cannot set up logging: {e}");
        std::process::exit(1);
    }

    let config = args.config();
    let mut session = match Session::new(config.clone()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    log::info!("starting {}x{} grid", config.rows, config.rows);

    let driver = CrosstermDriver::new().with_cell_width(config.cell_width);
    match driver.fits_terminal(config.rows) {
        Ok(true) => {}
        Ok(false) => {
            if let Some((w, h)) = required_size(config.rows, config.cell_width) {
                log::warn!("terminal smaller than the {w}x{h} the grid needs");
                session.set_message(format!(
                    "terminal too small: the grid needs {w}x{h}, try a smaller --rows or --cell-width"
                ));
            }
        }
        Err(e) => log::warn!("cannot read terminal size: {e}"),
    }
    let mut app = App::new(session, driver);
    if let Err(e) = app.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
