use anyhow::Result;

use minichess::cli::CliSession;

fn main() -> Result<()> {
    env_logger::init();
    CliSession::new().run()
}
