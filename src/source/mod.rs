//! Log input sources.
//!
//! Input is always a newline-delimited stream read from stdin; readers over
//! in-memory buffers are used by tests and the library API.

pub mod stdin;

pub use stdin::LineReader;
