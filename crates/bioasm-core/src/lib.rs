//! # bioasm Core Library
//!
//! A library for resolving textual macromolecular structure identifiers (PDB codes,
//! chain and residue-range sub-selections, SCOP domains, biological-assembly
//! references) into fully materialized structures, and for reconstructing
//! biological assemblies by applying symmetry transformations to copies of an
//! asymmetric unit's chains.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models ([`core::models::structure::Structure`]
//!   and its header metadata), the structure identifier grammar and its typed parse
//!   result ([`core::ident`]), pure crystallographic geometry ([`core::xtal`]), and the
//!   narrow trait contracts behind which file parsing and network retrieval live
//!   ([`core::io`]).
//!
//! - **[`engine`]: The Logic Core.** This stateful layer owns the retrieval backend
//!   instances ([`engine::cache::StructureCache`], [`engine::resolver::AssemblyResolver`])
//!   and implements assembly reconstruction ([`engine::builder`]). Backends are
//!   lazily constructed on first use and can be swapped out at any time, e.g. to
//!   substitute a test double.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It ties
//!   the `engine` and `core` together: [`workflows::resolve::resolve`] takes an
//!   identifier string and returns the structure it names, routing assembly
//!   requests through reconstruction and everything else through the cache.

pub mod core;
pub mod engine;
pub mod workflows;
