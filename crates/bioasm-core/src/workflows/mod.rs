//! Public entry points tying the identifier grammar, the structure cache,
//! and assembly reconstruction together.

pub mod resolve;
