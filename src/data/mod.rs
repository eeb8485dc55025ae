//! ## Shared data types
//!
//! The metrics in *likeness* share a small data model:
//!
//! - [`ScoreTable`](matrices::ScoreTable), the flat dynamic programming table
//!   used by edit distance and global alignment.
//! - [`Window`](windows::Window) and [`WindowSet`](windows::WindowSet), the
//!   validated window length and the distinct windows of a sequence, used by
//!   the window-based metrics.
//! - Error helpers in [`err`].

/// Error traits for executables.
pub mod err;
/// Dynamic programming tables.
pub mod matrices;
/// Window lengths and window extraction.
pub mod windows;

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
