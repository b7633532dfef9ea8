//! # Core Models Module
//!
//! Fundamental data structures for representing macromolecular structures:
//! atoms, residues, chains, and the [`structure::Structure`] container that
//! owns them, plus the header metadata (crystallographic information and
//! biological-assembly definitions) attached to a loaded entry.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom representation with coordinates
//! - [`residue`] - Residue with sequence number and insertion code
//! - [`chain`] - Chain organization; assembly copies carry an operator tag
//! - [`structure`] - Complete structure with all components and lookups
//! - [`header`] - Read-only entry metadata (title, crystal info, assemblies)
//! - [`assembly`] - Biological-assembly transformation records
//! - [`ids`] - Stable identifier types for atoms, residues, and chains

pub mod assembly;
pub mod atom;
pub mod chain;
pub mod header;
pub mod ids;
pub mod residue;
pub mod structure;
