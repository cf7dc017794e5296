//! XML resource navigation.
//!
//! Locates the translatable element under a caret offset in an Android-style
//! string resource document and produces the document with that element's
//! value replaced. The enclosing element must itself be one of the supported
//! tags; a caret inside nested markup (e.g. `<b>` within a `<string>`) does
//! not qualify, mirroring how resource editors resolve the tag under cursor.

use crate::envelope::xml_escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::ops::Range;

/// A translatable element located in a resource document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpan {
    /// Tag name of the element
    pub tag: String,
    /// Raw value text between start and end tag, escapes as written
    pub value: String,
    /// Byte range of the raw value within the document
    pub value_range: Range<usize>,
}

/// Find the translatable element containing byte `offset`.
///
/// Returns `Some` only when the innermost element spanning the offset has a
/// supported tag name. Self-closing elements carry no editable value and
/// malformed documents make the whole lookup unavailable; both yield `None`.
pub fn find_translatable_at(
    xml: &str,
    offset: usize,
    supported_tags: &[String],
) -> Option<ElementSpan> {
    let mut reader = Reader::from_str(xml);

    // open elements: (name, start-tag start, value start)
    let mut stack: Vec<(String, usize, usize)> = Vec::new();
    let mut innermost: Option<ElementSpan> = None;

    loop {
        let event_start = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                let value_start = reader.buffer_position() as usize;
                stack.push((name, event_start, value_start));
            }

            Ok(Event::End(_)) => {
                let (name, tag_start, value_start) = stack.pop()?;
                let elem_end = reader.buffer_position() as usize;
                // Children pop before their parent, so the first popped
                // element spanning the offset is the innermost one.
                // event_start is the '<' of the closing tag, i.e. the value end.
                if innermost.is_none() && offset >= tag_start && offset < elem_end {
                    innermost = Some(ElementSpan {
                        tag: name,
                        value: xml[value_start..event_start].to_string(),
                        value_range: value_start..event_start,
                    });
                }
            }

            Ok(Event::Empty(_)) => {
                let elem_end = reader.buffer_position() as usize;
                if innermost.is_none() && offset >= event_start && offset < elem_end {
                    // Self-closing element under the caret: nothing to edit
                    return None;
                }
            }

            Ok(Event::Eof) => break,

            Err(_) => return None,

            _ => {}
        }
    }

    innermost.filter(|span| supported_tags.iter().any(|t| t == &span.tag))
}

/// Replace the located element's value with `new_text`, escaped.
///
/// Returns the whole document with the single edit applied.
pub fn replace_value(xml: &str, span: &ElementSpan, new_text: &str) -> String {
    let escaped = xml_escape(new_text);
    let mut out = String::with_capacity(xml.len() - span.value_range.len() + escaped.len());
    out.push_str(&xml[..span.value_range.start]);
    out.push_str(&escaped);
    out.push_str(&xml[span.value_range.end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESOURCE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="greeting">Hello "world"...</string>
    <string-array name="fruits">
        <item>First item</item>
        <item>Second item</item>
    </string-array>
    <string name="empty"></string>
    <string name="void"/>
    <color name="accent">#ff0000</color>
</resources>"#;

    fn tags() -> Vec<String> {
        vec!["string".to_string(), "item".to_string()]
    }

    #[test]
    fn test_find_string_by_caret_in_text() {
        let offset = RESOURCE.find("world").unwrap();
        let span = find_translatable_at(RESOURCE, offset, &tags()).unwrap();
        assert_eq!(span.tag, "string");
        assert_eq!(span.value, "Hello \"world\"...");
        assert_eq!(&RESOURCE[span.value_range.clone()], span.value);
    }

    #[test]
    fn test_find_string_by_caret_in_attribute() {
        let offset = RESOURCE.find("greeting").unwrap();
        let span = find_translatable_at(RESOURCE, offset, &tags()).unwrap();
        assert_eq!(span.tag, "string");
        assert_eq!(span.value, "Hello \"world\"...");
    }

    #[test]
    fn test_find_item_inside_array() {
        let offset = RESOURCE.find("Second").unwrap();
        let span = find_translatable_at(RESOURCE, offset, &tags()).unwrap();
        assert_eq!(span.tag, "item");
        assert_eq!(span.value, "Second item");
    }

    #[test]
    fn test_unsupported_tag_yields_none() {
        let offset = RESOURCE.find("#ff0000").unwrap();
        assert!(find_translatable_at(RESOURCE, offset, &tags()).is_none());
    }

    #[test]
    fn test_caret_between_elements_yields_enclosing_unsupported() {
        // whitespace directly under <resources> belongs to an unsupported tag
        let offset = RESOURCE.find("<string name=\"greeting\"").unwrap() - 1;
        assert!(find_translatable_at(RESOURCE, offset, &tags()).is_none());
    }

    #[test]
    fn test_empty_string_element() {
        let offset = RESOURCE.find("\"empty\"").unwrap();
        let span = find_translatable_at(RESOURCE, offset, &tags()).unwrap();
        assert_eq!(span.value, "");
        assert_eq!(span.value_range.len(), 0);
    }

    #[test]
    fn test_self_closing_element_yields_none() {
        let offset = RESOURCE.find("\"void\"").unwrap();
        assert!(find_translatable_at(RESOURCE, offset, &tags()).is_none());
    }

    #[test]
    fn test_nested_markup_is_not_translatable() {
        let xml = r#"<resources><string name="s">plain <b>bold</b> tail</string></resources>"#;
        let offset = xml.find("bold").unwrap();
        assert!(find_translatable_at(xml, offset, &tags()).is_none());
        // but the caret on the plain part still resolves to the string
        let offset = xml.find("plain").unwrap();
        let span = find_translatable_at(xml, offset, &tags()).unwrap();
        assert_eq!(span.tag, "string");
    }

    #[test]
    fn test_malformed_document_yields_none() {
        assert!(find_translatable_at("<resources><string>oops", 15, &tags()).is_none());
    }

    #[test]
    fn test_offset_past_document_yields_none() {
        assert!(find_translatable_at(RESOURCE, RESOURCE.len() + 100, &tags()).is_none());
    }

    #[test]
    fn test_replace_value() {
        let offset = RESOURCE.find("world").unwrap();
        let span = find_translatable_at(RESOURCE, offset, &tags()).unwrap();
        let updated = replace_value(RESOURCE, &span, "Hello \u{ab}world\u{bb}\u{2026}");
        assert!(updated.contains(
            "<string name=\"greeting\">Hello \u{ab}world\u{bb}\u{2026}</string>"
        ));
        // everything else untouched
        assert!(updated.contains("<item>First item</item>"));
        assert!(!updated.contains("Hello \"world\"..."));
    }

    #[test]
    fn test_replace_value_escapes_new_text() {
        let xml = r#"<resources><string name="s">old</string></resources>"#;
        let offset = xml.find("old").unwrap();
        let span = find_translatable_at(xml, offset, &tags()).unwrap();
        let updated = replace_value(xml, &span, "a < b & c");
        assert!(updated.contains("<string name=\"s\">a &lt; b &amp; c</string>"));
    }
}
