//! LJSON Import/Export für LandmarkGroup-Snapshots.
//!
//! Das Format nutzt "Structure of Arrays": Punkte, Flags und Connectivity
//! liegen als parallele Listen vor, Labels referenzieren Punkte per Index.

pub mod parser;
pub mod writer;

pub use parser::parse_ljson;
pub use writer::write_ljson;
