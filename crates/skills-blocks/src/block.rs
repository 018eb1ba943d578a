//! Managed block definition and rendering.

use crate::eol::EndOfLineStyle;

/// The marker pair for one named block.
///
/// Renders as `<!-- {tag}:START {name} -->` and `<!-- {tag}:END {name} -->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    tag: String,
    name: String,
}

impl Markers {
    pub fn new(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
        }
    }

    /// The opening marker line, without a line break.
    pub fn start(&self) -> String {
        format!("<!-- {}:START {} -->", self.tag, self.name)
    }

    /// The closing marker line, without a line break.
    pub fn end(&self) -> String {
        format!("<!-- {}:END {} -->", self.tag, self.name)
    }

    /// Build a block carrying `payload` between these markers.
    pub fn block(&self, payload: impl Into<String>) -> ManagedBlock {
        ManagedBlock::new(self.start(), self.end(), payload)
    }
}

/// A delimited, machine-owned region of a document.
///
/// The payload is opaque: it is placed between the markers verbatim and is
/// never inspected. Markers are expected not to occur anywhere else in the
/// document, including inside the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedBlock {
    start_marker: String,
    end_marker: String,
    payload: String,
}

impl ManagedBlock {
    pub fn new(
        start_marker: impl Into<String>,
        end_marker: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            start_marker: start_marker.into(),
            end_marker: end_marker.into(),
            payload: payload.into(),
        }
    }

    pub fn start_marker(&self) -> &str {
        &self.start_marker
    }

    pub fn end_marker(&self) -> &str {
        &self.end_marker
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Render as `start EOL payload EOL end EOL`.
    ///
    /// # Example
    /// ```
    /// use skills_blocks::{EndOfLineStyle, ManagedBlock};
    ///
    /// let block = ManagedBlock::new("<!-- s -->", "<!-- e -->", "body");
    /// assert_eq!(
    ///     block.render(EndOfLineStyle::Crlf),
    ///     "<!-- s -->\r\nbody\r\n<!-- e -->\r\n"
    /// );
    /// ```
    pub fn render(&self, eol: EndOfLineStyle) -> String {
        let eol = eol.as_str();
        format!(
            "{}{eol}{}{eol}{}{eol}",
            self.start_marker, self.payload, self.end_marker
        )
    }
}
