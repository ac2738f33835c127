use serde::{Deserialize, Serialize};

/// A document fetched from the storage service
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub body: Option<Body>,
}

/// Document body: an ordered list of structural elements
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// A node in the document's content tree.
///
/// Only paragraphs carry text this core reads; other kinds (tables, section
/// breaks) deserialize with `paragraph: None` and are skipped when
/// flattening.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    pub start_index: Option<u64>,
    pub end_index: Option<u64>,
    pub paragraph: Option<Paragraph>,
}

/// A paragraph: an ordered sequence of inline fragments
#[derive(Debug, Clone, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
}

/// An inline fragment of a paragraph.
///
/// Fragments without a text run (inline objects, footnote references) carry
/// no text payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    pub text_run: Option<TextRun>,
}

/// A run of literal text within a paragraph
#[derive(Debug, Clone, Deserialize)]
pub struct TextRun {
    pub content: Option<String>,
}

impl Document {
    /// Structural elements of the body, empty when the body is absent.
    pub fn content(&self) -> &[StructuralElement] {
        self.body
            .as_ref()
            .map(|body| body.content.as_slice())
            .unwrap_or(&[])
    }

    /// Flatten the content tree into plain text.
    ///
    /// Visits top-level elements in document order, concatenating the
    /// literal text of each paragraph fragment; non-paragraph elements and
    /// fragments without text are skipped. The result is trimmed. This is a
    /// lossy, one-directional projection: formatting and non-text structures
    /// are discarded.
    pub fn flatten_text(&self) -> String {
        let mut text = String::new();

        for element in self.content() {
            if let Some(paragraph) = &element.paragraph {
                for fragment in &paragraph.elements {
                    if let Some(run) = &fragment.text_run {
                        if let Some(content) = &run.content {
                            text.push_str(content);
                        }
                    }
                }
            }
        }

        text.trim().to_string()
    }

    /// End index of the last structural element.
    ///
    /// Defaults to 1 for an empty document: the service always keeps one
    /// reserved trailing structural character.
    pub fn end_index(&self) -> u64 {
        self.content()
            .last()
            .and_then(|element| element.end_index)
            .unwrap_or(1)
    }
}

/// One operation in a batched document update.
///
/// Serializes to the service's externally-tagged request shape, e.g.
/// `{"deleteContentRange": {"range": {...}}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateRequest {
    /// Delete a character range from the body
    DeleteContentRange { range: Range },
    /// Insert text at a location
    InsertText { location: Location, text: String },
}

/// Half-open character range within the document body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_index: u64,
    pub end_index: u64,
}

/// Insertion point within the document body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub index: u64,
}

/// Body of a batch-update call: operations applied atomically, in order
#[derive(Debug, Clone, Serialize)]
pub struct BatchUpdateRequest {
    pub requests: Vec<UpdateRequest>,
}
