use std::io;

use anyhow::Result;
use tracing::info;

use chessvar_play::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!(version = env!("CARGO_PKG_VERSION"), "chessvar starting");

    Session::new().run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
