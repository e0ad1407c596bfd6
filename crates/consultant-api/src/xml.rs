//! Strict reader for `<consultantLocations>` documents.
//!
//! The document must have exactly this shape:
//!
//! ```xml
//! <consultantLocations>
//!   <locations><name>..</name><location>..</location></locations>
//!   ...
//! </consultantLocations>
//! ```
//!
//! Any other root element, any unknown child element, a missing or repeated
//! field, or trailing content is rejected. Field text is kept exactly as
//! sent (entities unescaped, CDATA included, nothing trimmed). Whitespace
//! between elements, comments, processing instructions and attributes are
//! ignored.

use consultant_types::{LocationCollection, LocationRecord};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, BytesText, Event};

/// Root element name.
const ROOT: &str = "consultantLocations";
/// Element wrapping one record.
const RECORD: &str = "locations";
/// Record field holding the consultant name.
const NAME: &str = "name";
/// Record field holding the location.
const LOCATION: &str = "location";

/// Parse a full XML document into a collection.
///
/// Errors are human-readable descriptions of the first problem found.
pub(crate) fn decode_collection(text: &str) -> Result<LocationCollection, String> {
    let mut reader = Reader::from_str(text);

    let root_is_empty = loop {
        match next_event(&mut reader)? {
            Event::Start(e) => {
                expect_element(&e, ROOT)?;
                break false;
            }
            Event::Empty(e) => {
                expect_element(&e, ROOT)?;
                break true;
            }
            Event::Text(t) if is_blank(&t) => {}
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => return Err(String::from("document has no root element")),
            _ => return Err(format!("unexpected content before <{ROOT}>")),
        }
    };

    let mut records = Vec::new();
    if !root_is_empty {
        loop {
            match next_event(&mut reader)? {
                Event::Start(e) => {
                    expect_element(&e, RECORD)?;
                    records.push(read_record(&mut reader)?);
                }
                Event::Empty(e) => {
                    expect_element(&e, RECORD)?;
                    return Err(format!("<{RECORD}> is missing <{NAME}> and <{LOCATION}>"));
                }
                Event::End(_) => break,
                Event::Text(t) if is_blank(&t) => {}
                Event::Comment(_) | Event::PI(_) => {}
                Event::Eof => return Err(format!("unexpected end of document inside <{ROOT}>")),
                _ => return Err(format!("unexpected content inside <{ROOT}>")),
            }
        }
    }

    loop {
        match next_event(&mut reader)? {
            Event::Eof => break,
            Event::Text(t) if is_blank(&t) => {}
            Event::Comment(_) | Event::PI(_) => {}
            _ => return Err(format!("unexpected content after </{ROOT}>")),
        }
    }

    Ok(LocationCollection::new(records))
}

/// Read the fields of one record; the opening `<locations>` is consumed.
fn read_record(reader: &mut Reader<&[u8]>) -> Result<LocationRecord, String> {
    let mut name: Option<String> = None;
    let mut location: Option<String> = None;

    loop {
        match next_event(reader)? {
            Event::Start(e) => {
                let field = element_name(&e)?;
                let slot = field_slot(&field, &mut name, &mut location)?;
                *slot = Some(read_text(reader, &field)?);
            }
            Event::Empty(e) => {
                let field = element_name(&e)?;
                let slot = field_slot(&field, &mut name, &mut location)?;
                *slot = Some(String::new());
            }
            Event::End(_) => break,
            Event::Text(t) if is_blank(&t) => {}
            Event::Comment(_) | Event::PI(_) => {}
            Event::Eof => return Err(format!("unexpected end of document inside <{RECORD}>")),
            _ => return Err(format!("unexpected content inside <{RECORD}>")),
        }
    }

    match (name, location) {
        (Some(name), Some(location)) => Ok(LocationRecord { name, location }),
        (None, _) => Err(format!("<{RECORD}> is missing <{NAME}>")),
        (_, None) => Err(format!("<{RECORD}> is missing <{LOCATION}>")),
    }
}

/// Pick the slot for a record field, rejecting unknown and repeated fields.
fn field_slot<'a>(
    field: &str,
    name: &'a mut Option<String>,
    location: &'a mut Option<String>,
) -> Result<&'a mut Option<String>, String> {
    let slot = match field {
        NAME => name,
        LOCATION => location,
        other => return Err(format!("unknown element <{other}> inside <{RECORD}>")),
    };
    if slot.is_some() {
        return Err(format!("<{field}> appears more than once in <{RECORD}>"));
    }
    Ok(slot)
}

/// Collect the text of a leaf element up to its closing tag.
fn read_text(reader: &mut Reader<&[u8]>, field: &str) -> Result<String, String> {
    let mut value = String::new();
    loop {
        match next_event(reader)? {
            Event::Text(t) => {
                let text = t.unescape().map_err(|e| format!("in <{field}>: {e}"))?;
                value.push_str(&text);
            }
            Event::CData(c) => {
                let text = c.decode().map_err(|e| format!("in <{field}>: {e}"))?;
                value.push_str(&text);
            }
            Event::End(_) => return Ok(value),
            Event::Comment(_) | Event::PI(_) => {}
            Event::Eof => return Err(format!("unexpected end of document inside <{field}>")),
            _ => return Err(format!("<{field}> must contain only text")),
        }
    }
}

fn next_event<'a>(reader: &mut Reader<&'a [u8]>) -> Result<Event<'a>, String> {
    reader.read_event().map_err(|e| e.to_string())
}

fn element_name(start: &BytesStart<'_>) -> Result<String, String> {
    std::str::from_utf8(start.name().as_ref())
        .map(str::to_owned)
        .map_err(|e| format!("element name is not UTF-8: {e}"))
}

fn expect_element(start: &BytesStart<'_>, expected: &str) -> Result<(), String> {
    let found = element_name(start)?;
    if found == expected {
        Ok(())
    } else {
        Err(format!("expected <{expected}>, found <{found}>"))
    }
}

fn is_blank(text: &BytesText<'_>) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}
