//! bankimport-ingest: export-format detection, per-format row extractors,
//! and normalization into `bankimport_core::Statement`.

pub mod decode;
pub mod detect;
pub mod error;
pub mod importer;
pub mod normalize;
pub mod parsers;
pub mod types;
pub mod values;

pub use detect::{detect_format, StatementFormat};
pub use error::ImportError;
pub use importer::{Institution, StatementImporter};
pub use normalize::normalize;
pub use types::{AmountConflict, RawRow, TransactionRow};
