//! I/O-facing contracts of the library.
//!
//! File-format parsing, disk caching, and network download live behind the
//! narrow provider traits in [`traits`]; the core never sees format details.
//! [`filetype`] guesses a structure file's format from its extension.

pub mod filetype;
pub mod traits;
