//! Colour table generator.
//!
//! Turns the built-in table of named CMYK colours into a C header of
//! `COLOUR_<NAME>` constants and a data file of parallel lookup arrays.

pub mod catalogue;
pub mod codegen;
pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod table;

pub use catalogue::{Catalogue, CatalogueEntry};
pub use color::{Cmyk, ColourEntry};
pub use error::GenerateError;
pub use generator::{generate, GenerateReport};
pub use table::ColourTable;
