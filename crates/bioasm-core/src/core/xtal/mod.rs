//! Crystallographic bookkeeping: unit cell parameters, space-group
//! operators, and the conversion of fractional-coordinate operators into the
//! orthonormal frame that assembly reconstruction works in.
//!
//! Space-group *tables* (symbol -> operator list) are an external concern;
//! this module only validates and transforms operators handed to it.

pub mod cell;
pub mod info;
pub mod space_group;
