use crate::conversion::{convert_quad, convert_triple};
use crate::error::{RdfParseError, RdfSyntaxError};
use crate::format::ParserFormat;
use crate::triple::Triple;
use oxjsonld::JsonLdParser;
use oxttl::TurtleParser;
use std::io::Read;
use tracing::debug;

/// Runs the external parser for `format` on the whole input and returns the converted triples.
///
/// Nothing is returned on error, even if some triples were read before it.
pub(crate) fn parse_triples(
    reader: impl Read,
    format: ParserFormat,
    base_iri: &str,
) -> Result<Vec<Triple>, RdfParseError> {
    match format {
        ParserFormat::Turtle => parse_turtle(reader, base_iri),
        ParserFormat::JsonLd => parse_json_ld(reader, base_iri),
    }
}

fn parse_turtle(reader: impl Read, base_iri: &str) -> Result<Vec<Triple>, RdfParseError> {
    let mut parser = TurtleParser::new();
    if !base_iri.is_empty() {
        parser = parser
            .with_base_iri(base_iri)
            .map_err(|e| RdfSyntaxError::invalid_base_iri(base_iri, e))?;
    }
    parser
        .for_reader(reader)
        .map(|t| t.map(convert_triple).map_err(RdfParseError::from))
        .collect()
}

// The JSON-LD processor works on the complete document.
// Quads of named graphs are kept as triples of this graph.
// An unusable base IRI is skipped: documents with absolute IRIs still load.
fn parse_json_ld(mut reader: impl Read, base_iri: &str) -> Result<Vec<Triple>, RdfParseError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    let mut parser = JsonLdParser::new();
    if !base_iri.is_empty() {
        match parser.clone().with_base_iri(base_iri) {
            Ok(p) => parser = p,
            Err(e) => debug!(base_iri, error = %e, "ignoring invalid base IRI"),
        }
    }
    parser
        .for_slice(&buffer)
        .map(|q| q.map(convert_quad).map_err(RdfParseError::from))
        .collect()
}
