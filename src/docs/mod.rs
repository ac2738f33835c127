//! Document storage client: read a document's text and write edits back.
//!
//! The storage service addresses body content by a 1-based character index
//! space; index 1 is the start of the body and the final index is a reserved
//! trailing newline the service maintains. Reads flatten the nested content
//! tree into plain text; writes replace the whole body in one batched,
//! atomic call.

mod client;
mod types;


pub use client::DocsClient;
pub use types::{
    BatchUpdateRequest, Body, Document, Location, Paragraph, ParagraphElement, Range,
    StructuralElement, TextRun, UpdateRequest,
};
