/// dragcube terminal demo
///
/// Renders the six-faced cube in the terminal and rotates it while the left
/// mouse button is dragged across it.
/// Usage: dragcube-terminal [config.toml]
/// Set DRAGCUBE_LOG=<file> to write logs (filtered by RUST_LOG) to a file.

use std::env;
use std::fs::File;
use std::io;
use std::sync::Mutex;

use dragcube_core::CubeConfig;
use dragcube_terminal::TerminalApp;
use tracing_subscriber::EnvFilter;

fn init_logging() -> io::Result<()> {
    // stdout belongs to the renderer, so logs only go to a file
    let Ok(path) = env::var("DRAGCUBE_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn load_config() -> io::Result<CubeConfig> {
    let Some(path) = env::args().nth(1) else {
        return Ok(CubeConfig::default());
    };

    let text = std::fs::read_to_string(&path)
        .map_err(|e| io::Error::new(e.kind(), format!("Failed to read config {}: {}", path, e)))?;
    let config = CubeConfig::from_toml_str(&text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Failed to load config {}: {}", path, e)))?;

    log::info!("loaded config from {}", path);
    Ok(config)
}

fn main() -> io::Result<()> {
    init_logging()?;
    let config = load_config()?;

    let mut app = TerminalApp::new(&config)?;
    app.run()?;

    log::info!("final cube transform has {} clauses", app.cube().transform().len());
    Ok(())
}
