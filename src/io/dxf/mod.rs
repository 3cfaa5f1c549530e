//! DXF (Drawing Exchange Format) reading
//!
//! The reader runs in stages, each consuming the output of the previous one:
//! text is tokenized into group pairs, the pairs are split into sections, and
//! each section is parsed into its structural model.

pub mod code_page;
mod reader;
mod sections;
mod tokenizer;

pub use code_page::{decode_dxf_bytes, encoding_from_code_page};
pub use reader::{
    parse_blocks, parse_entities, parse_header, parse_tables, DxfReader, DxfReaderConfiguration,
};
pub use sections::{split_sections, Sections};
pub use tokenizer::{tokenize, GroupPair};
