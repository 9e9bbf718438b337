use std::io::{self, Write};

use crate::runtime::RuntimeInfo;
use crate::versioning::greeting;

pub const SEPARATOR: &str = "=================================";

pub fn lines(info: &RuntimeInfo) -> Vec<String> {
  vec![
    SEPARATOR.to_string(),
    greeting(),
    format!("Language Version: {}", info.version),
    format!("Language Vendor: {}", info.vendor),
    SEPARATOR.to_string(),
  ]
}

pub fn render(info: &RuntimeInfo) -> String {
  let mut out = String::new();
  for line in lines(info) {
    out.push_str(&line);
    out.push('\n');
  }
  out
}

pub fn write_banner<W: Write>(out: &mut W, info: &RuntimeInfo) -> io::Result<()> {
  out.write_all(render(info).as_bytes())?;
  out.flush()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn separator_is_33_equals_signs() {
    assert_eq!(SEPARATOR, "=".repeat(33));
  }

  #[test]
  fn target_is_not_printed() {
    let info = RuntimeInfo {
      version: "1.80.0".to_string(),
      vendor: "Homebrew".to_string(),
      target: "aarch64-apple-darwin".to_string(),
    };
    assert!(!render(&info).contains("aarch64-apple-darwin"));
  }
}
