//! Environment variable management for testing
//!
//! Tests that read credentials from the process environment use
//! [`EnvVarGuard`] so the original value is restored when the test ends.

use std::env;

/// Overrides a single environment variable for the lifetime of the guard.
pub struct EnvVarGuard {
  /// Name of the variable being overridden
  name: &'static str,
  /// The value the variable had before the guard was created, if any
  original: Option<String>,
}

impl EnvVarGuard {
  /// Start guarding `name`. The variable is left untouched until
  /// [`set`](Self::set) or [`remove`](Self::remove) is called.
  pub fn new(name: &'static str) -> Self {
    Self {
      name,
      original: env::var(name).ok(),
    }
  }

  /// Set the guarded variable to `value`.
  pub fn set(&self, value: &str) {
    // SAFETY: tests that touch a given variable hold its guard for their whole
    // duration and restore it on drop.
    unsafe {
      env::set_var(self.name, value);
    }
  }

  /// Remove the guarded variable from the environment.
  pub fn remove(&self) {
    // SAFETY: see `set`.
    unsafe {
      env::remove_var(self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    // Restore the original value
    match &self.original {
      // SAFETY: see `set`.
      Some(val) => unsafe {
        env::set_var(self.name, val);
      },
      // SAFETY: see `set`.
      None => unsafe {
        env::remove_var(self.name);
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_guard_restores_original_value() {
    const NAME: &str = "DESKHAND_TEST_UTILS_GUARD";

    {
      let guard = EnvVarGuard::new(NAME);
      guard.set("temporary");
      assert_eq!(env::var(NAME).as_deref(), Ok("temporary"));

      guard.remove();
      assert!(env::var(NAME).is_err());
    }

    assert!(env::var(NAME).is_err());
  }
}
