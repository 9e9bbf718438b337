use std::io;

use anyhow::{Context, Result};

use crate::banner::write_banner;
use crate::runtime::RuntimeInfo;

pub fn run() -> Result<()> {
  let info = RuntimeInfo::detect();
  tracing::debug!(
    crate_version = env!("CARGO_PKG_VERSION"),
    version = %info.version,
    vendor = %info.vendor,
    target = %info.target,
    "detected toolchain"
  );

  let stdout = io::stdout();
  let mut out = stdout.lock();
  write_banner(&mut out, &info).context("failed to write banner to stdout")?;
  Ok(())
}
