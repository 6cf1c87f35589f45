//! domlist Domain List Compiler
//!
//! This crate compiles plaintext domain lists into JSON rule-set documents.

pub mod parser;
pub mod builder;
pub mod writer;
pub mod convert;
pub mod error;

pub use builder::build_document;
pub use convert::{convert_file, ConvertStats};
pub use error::ConvertError;
pub use parser::{parse_domain_list, read_domain_list, ParsedList};
pub use writer::{render_document, write_document};
