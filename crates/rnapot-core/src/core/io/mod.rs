//! Provides input/output functionality for the file formats of the pipeline.
//!
//! Structure files are read through the [`traits::StructureFile`] interface, with
//! [`pdb::PdbFile`] as the fixed-column PDB implementation. Score curves are persisted
//! as plain text by [`curve`], one file per base-pair code.

pub mod curve;
pub mod pdb;
pub mod traits;
