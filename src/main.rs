use anyhow::Result;

fn main() -> Result<()> {
    // Arguments are accepted and ignored.
    hello_rust::logging::init();
    if let Err(err) = hello_rust::cli::run() {
        tracing::warn!("banner output incomplete: {err:#}");
    }
    Ok(())
}
