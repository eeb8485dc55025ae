use std::fmt::Display;

/// Trait for specifying process exit codes for errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior for executables built on *likeness*, exiting with the status code
/// provided by [`GetCode`].
///
/// ```no_run
/// use likeness::prelude::*;
///
/// let window = Window::new(0).unwrap_or_die("A window of zero is not allowed");
/// # let _ = window;
/// ```
pub trait OrFail<T> {
    /// Unwraps the value or prints the error to stderr and exits.
    fn unwrap_or_fail(self) -> T;
    /// Unwraps the value or prints `msg` and the error to stderr and exits.
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}
