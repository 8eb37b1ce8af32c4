//! # Introduction
//!
//! algotrace runs classic algorithms on small inputs and records a
//! [`snapshot::Snapshot`] of the algorithm's state at every meaningful step.
//! The resulting [`snapshot::Trace`] can be serialized to JSON, printed as a
//! narration, or replayed forward and backward in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Tracer → Trace<Event, State> → Replay → JSON / text / TUI
//! ```
//!
//! 1. [`sorting`], [`searching`], [`graph`], [`tree`], [`linear`] and
//!    [`dynamic`] hold the tracers.  Each one owns a private copy of its
//!    input and emits typed snapshots through a [`snapshot::Recorder`].
//! 2. [`catalog`] names every traceable run as a [`catalog::Request`] and
//!    erases the per-algorithm types into a uniform [`catalog::Replay`].
//! 3. [`config`] holds input limits and playback settings.
//! 4. [`samples`] has the fixed demonstration inputs.
//! 5. [`ui`] is the replay viewer; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use algotrace::sorting::bubble;
//!
//! let trace = bubble::trace(&[3, 1, 2]);
//! assert_eq!(trace.last().state.array, vec![1, 2, 3]);
//! ```

pub mod catalog;
pub mod config;
pub mod dynamic;
pub mod error;
pub mod graph;
pub mod linear;
pub mod samples;
pub mod searching;
pub mod snapshot;
pub mod sorting;
pub mod tree;
pub mod ui;
