pub const LOGS_ENV_VAR: &str = "URLPARAMS_LOGS_ENABLED";

#[macro_export]
macro_rules! log {
  ($($arg:tt)*) => {
    $crate::logger::log(format!($($arg)*))
  };
}

pub fn logs_enabled() -> bool {
  std::env::var(LOGS_ENV_VAR).unwrap_or("0".to_string()) == "1"
}

pub fn log(message: impl AsRef<str>) {
  // If URLPARAMS_LOGS_ENABLED is 1, log the message with a timestamp.
  // Goes to stderr so stdout stays machine readable.
  if logs_enabled() {
    eprintln!("{}", format_line(message.as_ref()));
  }
}

fn format_line(message: &str) -> String {
  format!("[{}] {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"), message)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn line_has_timestamp_prefix() {
    let line = format_line("hello");
    assert!(line.starts_with('['));
    assert!(line.ends_with("] hello"));
    // "[YYYY-MM-DD HH:MM:SS] "
    assert_eq!(line.find(']'), Some(20));
  }
}
