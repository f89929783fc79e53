//! Errors are [`anyhow::Error`], annotated with [`anyhow::Context`] where they cross a
//! filesystem boundary.

pub use anyhow::{Context, Error};

/// Convenient wrapper around `std::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Render the error chain, one cause per line, and print it to stderr.
pub fn display(error: &Error) -> String {
  let mut msg = "Error:\n".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("└> {} - {}\n", index, error)));
  eprint!("{}", msg);
  msg
}
