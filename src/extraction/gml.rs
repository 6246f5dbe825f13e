use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{parse_pos_list, PointExtractor};
use crate::error::{ExtractionError, Result};
use crate::math::Point3;

const POS_LIST: &[u8] = b"posList";
const DEFAULT_DIMENSION: usize = 3;

/// Extracts ring points from a GML `LinearRing` document.
#[derive(Debug, Clone, Copy, Default)]
pub struct GmlExtractor;

impl PointExtractor for GmlExtractor {
    type Input = str;

    fn extract(&self, input: &str) -> Result<Vec<Point3>> {
        extract_ring_points(input)
    }
}

/// Reads the points of the first `posList` element in `xml`.
///
/// The namespace prefix is ignored. `srsDimension` on the element selects 2D
/// or 3D coordinates and defaults to 3.
///
/// # Errors
///
/// Returns an error if the XML is malformed, holds no `posList`, or the
/// coordinate list cannot be parsed.
pub fn extract_ring_points(xml: &str) -> Result<Vec<Point3>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut dimension: Option<usize> = None;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == POS_LIST => {
                dimension = Some(srs_dimension(e)?);
            }
            Ok(Event::Empty(ref e)) if e.local_name().as_ref() == POS_LIST => {
                return parse_pos_list("", srs_dimension(e)?);
            }
            Ok(Event::Text(t)) if dimension.is_some() => {
                let chunk =
                    std::str::from_utf8(&t).map_err(|e| ExtractionError::Xml(e.to_string()))?;
                text.push(' ');
                text.push_str(chunk);
            }
            Ok(Event::End(ref e)) if e.local_name().as_ref() == POS_LIST => {
                if let Some(dimension) = dimension {
                    return parse_pos_list(&text, dimension);
                }
            }
            Ok(Event::Eof) => return Err(ExtractionError::MissingPosList.into()),
            Err(e) => return Err(ExtractionError::Xml(e.to_string()).into()),
            _ => {}
        }
    }
}

fn srs_dimension(e: &BytesStart) -> Result<usize> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| ExtractionError::Xml(err.to_string()))?;
        if attr.key.local_name().as_ref() == b"srsDimension" {
            let value =
                std::str::from_utf8(&attr.value).map_err(|err| ExtractionError::Xml(err.to_string()))?;
            return value
                .trim()
                .parse::<usize>()
                .map_err(|_| ExtractionError::UnsupportedDimension(value.to_string()).into());
        }
    }
    Ok(DEFAULT_DIMENSION)
}
