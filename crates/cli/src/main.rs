use anyhow::Context;

use stocktrack_cli::{Session, SessionConfig};

fn main() -> anyhow::Result<()> {
    stocktrack_observability::init();

    let config = SessionConfig::from_env();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), &config);

    session.run().context("inventory session aborted")?;
    Ok(())
}
