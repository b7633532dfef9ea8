//! # Structure Identifier Module
//!
//! The textual grammar for naming structures and its typed parse result.
//!
//! An identifier names a whole PDB entry, a chain/range sub-selection of
//! one, a SCOP domain, a PDP domain prediction, a biological assembly, or an
//! opaque URL. Parsing yields exactly one [`id::StructureId`] variant or a
//! [`parser::ParseError`], never a guessed structure:
//!
//! ```text
//! 1TIM          whole entry - asymmetric unit
//! 4HHB.C        single chain
//! 4GCR.A_1-83   one residue range
//! 3AA0.A,B      two chains treated as one structure
//! d2bq6a1       SCOP domain
//! BIOL:1fah     biological assembly nr 1 for 1fah
//! BIOL:1fah:0   asymmetric unit for 1fah
//! PDP:4HHBAa    domain prediction
//! ```

pub mod id;
pub mod parser;

pub use id::{PdbId, Selector, StructureId};
pub use parser::ParseError;
