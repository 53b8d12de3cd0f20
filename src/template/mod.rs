//! Fragment templates: literal markup with named placeholders.
//!
//! A template is split by [`Segments`] into literal spans and `{{ token }}`
//! placeholders. [`write_template`] copies literal spans to the writer
//! byte-for-byte and hands each token to a caller-supplied resolver, which
//! may write text, recurse into a child element's write, or copy a
//! precomputed fragment.
//!
//! Writes stream: if the resolver fails, everything written before the
//! failing token stays in the sink.
//!
//! # Example
//!
//! ```
//! use compton::template::write_template;
//! use compton::Error;
//!
//! let mut out = Vec::new();
//! write_template("a{{T}}b", &mut out, |token, w| match token {
//!     "T" => Ok(w.write_all(b"X")?),
//!     other => Err(Error::unknown_token(other)),
//! })?;
//! assert_eq!(out, b"aXb");
//! # Ok::<(), compton::Error>(())
//! ```

use std::io::Write;

use log::trace;
use memchr::memmem;

use crate::error::Result;

/// Element attributes (id, class, and the rest).
pub const ATTRIBUTES_TOKEN: &str = ".Attributes";
/// The element's children, in order.
pub const CONTENT_TOKEN: &str = ".Content";
/// One-time definitions required by the subtree.
pub const REQUIREMENTS_TOKEN: &str = ".Requirements";
/// Resources that must follow the content.
pub const DEFERRALS_TOKEN: &str = ".Deferrals";

const OPEN: &[u8] = b"{{";
const CLOSE: &[u8] = b"}}";

/// A piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied verbatim.
    Literal(&'a str),
    /// Placeholder name, surrounding whitespace trimmed.
    Token(&'a str),
}

/// Lexer over a template.
///
/// An opening `{{` without a matching `}}` is literal text.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Segments<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let rest = &self.src[self.pos..];
        if rest.is_empty() {
            return None;
        }

        match memmem::find(rest.as_bytes(), OPEN) {
            Some(0) => {
                let inner = &rest[OPEN.len()..];
                match memmem::find(inner.as_bytes(), CLOSE) {
                    Some(end) => {
                        self.pos += OPEN.len() + end + CLOSE.len();
                        Some(Segment::Token(inner[..end].trim()))
                    }
                    None => {
                        self.pos = self.src.len();
                        Some(Segment::Literal(rest))
                    }
                }
            }
            Some(start) => {
                self.pos += start;
                Some(Segment::Literal(&rest[..start]))
            }
            None => {
                self.pos = self.src.len();
                Some(Segment::Literal(rest))
            }
        }
    }
}

/// Write a template, resolving each placeholder through `resolve`.
///
/// The first resolver error aborts the write and is returned unchanged.
pub fn write_template<F>(template: &str, w: &mut dyn Write, mut resolve: F) -> Result<()>
where
    F: FnMut(&str, &mut dyn Write) -> Result<()>,
{
    for segment in Segments::new(template) {
        match segment {
            Segment::Literal(text) => w.write_all(text.as_bytes())?,
            Segment::Token(token) => {
                trace!("resolving template token {token}");
                resolve(token, &mut *w)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;

    fn segments(src: &str) -> Vec<Segment<'_>> {
        Segments::new(src).collect()
    }

    fn render(template: &str) -> Result<String> {
        let mut out = Vec::new();
        write_template(template, &mut out, |token, w| match token {
            "T" => Ok(w.write_all(b"X")?),
            "Empty" => Ok(()),
            other => Err(Error::unknown_token(other)),
        })?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_segments() {
        assert_eq!(
            segments("<p{{.Attributes}}>{{ .Content }}</p>"),
            vec![
                Segment::Literal("<p"),
                Segment::Token(".Attributes"),
                Segment::Literal(">"),
                Segment::Token(".Content"),
                Segment::Literal("</p>"),
            ]
        );
    }

    #[test]
    fn test_segments_empty() {
        assert!(segments("").is_empty());
        assert_eq!(segments("{{}}"), vec![Segment::Token("")]);
    }

    #[test]
    fn test_unterminated_placeholder_is_literal() {
        assert_eq!(
            segments("a{{b"),
            vec![Segment::Literal("a"), Segment::Literal("{{b")]
        );
        assert_eq!(render("a{{T").unwrap(), "a{{T");
    }

    #[test]
    fn test_substitution_preserves_literals() {
        assert_eq!(render("a{{T}}b").unwrap(), "aXb");
        assert_eq!(render("{{T}}{{T}}").unwrap(), "XX");
        assert_eq!(render("é{{Empty}}ü}}").unwrap(), "éü}}");
    }

    #[test]
    fn test_unknown_token_keeps_partial_output() {
        let mut out = Vec::new();
        let result = write_template("head{{T}}mid{{Nope}}tail", &mut out, |token, w| match token {
            "T" => Ok(w.write_all(b"X")?),
            other => Err(Error::unknown_token(other)),
        });

        match result {
            Err(Error::UnknownToken(t)) => assert_eq!(t, "Nope"),
            other => panic!("Expected UnknownToken, got {other:?}"),
        }
        assert_eq!(out, b"headXmid");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_errors_propagate() {
        let result = write_template("abc", &mut FailingWriter, |_, _| Ok(()));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    proptest! {
        #[test]
        fn prop_literal_text_passes_through(
            before in "[^{}]*",
            after in "[^{}]*",
        ) {
            let template = format!("{before}{{{{T}}}}{after}");
            prop_assert_eq!(render(&template).unwrap(), format!("{before}X{after}"));
        }

        #[test]
        fn prop_templates_without_placeholders_are_identity(text in "[^{]*") {
            prop_assert_eq!(render(&text).unwrap(), text);
        }
    }
}
