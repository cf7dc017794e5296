//! SOAP request envelope construction for the ProcessText operation.

use crate::config::RequestParams;

/// SOAP 1.1 envelope namespace.
pub const SOAP_11_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Typograf web service namespace.
pub const TYPOGRAF_NS: &str = "http://typograf.artlebedev.ru/webservices/";

/// Build the ProcessText request envelope.
///
/// The template is fixed; only the text varies between calls. With
/// `escape_text` off the text is embedded verbatim, matching how the service
/// has always been called from resource editors.
pub fn build_process_text_request(text: &str, params: &RequestParams, escape_text: bool) -> String {
    let text = if escape_text {
        xml_escape(text)
    } else {
        text.to_string()
    };

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
               xmlns:xsd="http://www.w3.org/2001/XMLSchema"
               xmlns:soap="{SOAP_11_NS}">
  <soap:Body>
    <ProcessText xmlns="{TYPOGRAF_NS}">
      <text>{text}</text>
      <entityType>{entity_type}</entityType>
      <useBr>{use_br}</useBr>
      <useP>{use_p}</useP>
      <maxNobr>{max_nobr}</maxNobr>
      <quotA>{quot_a}</quotA>
      <quotB>{quot_b}</quotB>
    </ProcessText>
  </soap:Body>
</soap:Envelope>"#,
        entity_type = params.entity_type,
        use_br = params.use_br,
        use_p = params.use_p,
        max_nobr = params.max_nobr,
        quot_a = params.quot_a,
        quot_b = params.quot_b,
    )
}

/// Escape XML-reserved characters in text content.
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
