//! Response XML parsing.
//!
//! Uses quick-xml which is safe against XXE by default (doesn't expand
//! external entities).

use crate::error::{CorrectionFailure, FailureReason};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Local name of the response element carrying the corrected text.
pub const RESULT_ELEMENT: &str = "ProcessTextResult";

/// Extract the corrected text from a ProcessText response body.
///
/// Returns the text content of the first `ProcessTextResult` element, with
/// surrounding whitespace trimmed. Any later occurrences are ignored. Text is
/// collected across nested elements and CDATA sections, entities unescaped.
/// The document must be well-formed: quick-xml does not flag missing end
/// tags at EOF on its own, so a document truncated inside an open element is
/// rejected here as a parse failure rather than surfaced as a partial result.
pub fn extract_process_text_result(xml: &str) -> Result<String, CorrectionFailure> {
    let mut reader = Reader::from_str(xml);

    let mut in_result = false;
    let mut result_depth = 0u32;
    let mut open_elements = 0u32;
    let mut content = String::new();
    let mut found = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                open_elements += 1;
                let is_result = e.local_name().as_ref() == RESULT_ELEMENT.as_bytes();
                if in_result {
                    result_depth += 1;
                } else if !found && is_result {
                    in_result = true;
                    found = true;
                    result_depth = 0;
                }
            }

            Ok(Event::Empty(ref e)) => {
                // A self-closing <ProcessTextResult/> carries empty content
                if !in_result && !found && e.local_name().as_ref() == RESULT_ELEMENT.as_bytes() {
                    found = true;
                }
            }

            Ok(Event::End(_)) => {
                open_elements = open_elements.saturating_sub(1);
                if in_result {
                    if result_depth == 0 {
                        in_result = false;
                    } else {
                        result_depth -= 1;
                    }
                }
            }

            Ok(Event::Text(ref e)) => {
                if in_result {
                    let text = e.unescape().map_err(|e| {
                        CorrectionFailure::new(
                            FailureReason::Parse,
                            format!("Invalid text content: {}", e),
                        )
                    })?;
                    content.push_str(&text);
                }
            }

            Ok(Event::CData(ref e)) => {
                if in_result {
                    let text = std::str::from_utf8(e.as_ref()).map_err(|e| {
                        CorrectionFailure::new(
                            FailureReason::Parse,
                            format!("Invalid UTF-8 in CDATA: {}", e),
                        )
                    })?;
                    content.push_str(text);
                }
            }

            Ok(Event::Eof) => {
                if open_elements > 0 {
                    return Err(CorrectionFailure::new(
                        FailureReason::Parse,
                        "Unexpected end of document inside an open element",
                    ));
                }
                break;
            }

            Err(e) => {
                return Err(CorrectionFailure::new(
                    FailureReason::Parse,
                    format!("XML parse error: {}", e),
                ));
            }

            _ => {}
        }
    }

    if !found {
        return Err(CorrectionFailure::new(
            FailureReason::MissingResult,
            format!("No {} element in response", RESULT_ELEMENT),
        ));
    }

    Ok(content.trim().to_string())
}
