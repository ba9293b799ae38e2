use crate::error::UnsupportedFormatError;
use std::fmt;

/// The value of the `Accept` header sent when fetching a document, formats in preference order.
pub const ACCEPT: &str = "text/turtle,application/ld+json;q=0.9,text/n3;q=0.8";

/// Formats [`Graph::parse`](crate::Graph::parse) can read.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum ParserFormat {
    /// [Turtle](https://www.w3.org/TR/turtle/), also used for [N-Triples](https://www.w3.org/TR/n-triples/) input.
    Turtle,
    /// [JSON-LD](https://www.w3.org/TR/json-ld/)
    JsonLd,
}

/// Formats [`Graph::serialize`](crate::Graph::serialize) can write.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum SerializerFormat {
    /// Turtle-style text grouped by subject.
    Turtle,
    /// Simplified JSON-LD: an array of node objects.
    JsonLd,
    /// [N-Triples](https://www.w3.org/TR/n-triples/): one triple per line.
    NTriples,
}

// `None` marks media types that are known but deliberately not handled.
const PARSERS: [(&str, Option<ParserFormat>); 7] = [
    ("application/ld+json", Some(ParserFormat::JsonLd)),
    ("application/json", None),
    ("application/sparql-update", None),
    ("text/turtle", Some(ParserFormat::Turtle)),
    ("application/x-turtle", Some(ParserFormat::Turtle)),
    ("application/n-triples", Some(ParserFormat::Turtle)),
    ("text/n3", Some(ParserFormat::Turtle)),
];

const SERIALIZERS: [(&str, Option<SerializerFormat>); 5] = [
    ("application/ld+json", Some(SerializerFormat::JsonLd)),
    ("text/html", None),
    ("text/turtle", Some(SerializerFormat::Turtle)),
    ("application/x-turtle", Some(SerializerFormat::Turtle)),
    ("application/n-triples", Some(SerializerFormat::NTriples)),
];

const EXTENSIONS: [(&str, &str); 5] = [
    ("ttl", "text/turtle"),
    ("n3", "text/n3"),
    ("nt", "application/n-triples"),
    ("rdf", "application/rdf+xml"),
    ("jsonld", "application/ld+json"),
];

impl ParserFormat {
    /// Looks up the parser for a media type.
    ///
    /// Parameters like `charset` are ignored.
    /// Unknown media types fall back to Turtle; known but unsupported ones are an error.
    ///
    /// ```
    /// use rdfmem::ParserFormat;
    ///
    /// assert_eq!(
    ///     ParserFormat::from_media_type("application/ld+json")?,
    ///     ParserFormat::JsonLd
    /// );
    /// assert_eq!(
    ///     ParserFormat::from_media_type("text/turtle; charset=utf-8")?,
    ///     ParserFormat::Turtle
    /// );
    /// assert_eq!(ParserFormat::from_media_type("")?, ParserFormat::Turtle);
    /// assert!(ParserFormat::from_media_type("application/sparql-update").is_err());
    /// # Result::<_, rdfmem::UnsupportedFormatError>::Ok(())
    /// ```
    pub fn from_media_type(media_type: &str) -> Result<Self, UnsupportedFormatError> {
        lookup(&PARSERS, media_type)
            .unwrap_or(Some(Self::Turtle))
            .ok_or_else(|| UnsupportedFormatError {
                media_type: media_type.into(),
            })
    }

    /// The format canonical [IANA media type](https://tools.ietf.org/html/rfc2046).
    #[inline]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::Turtle => "text/turtle",
            Self::JsonLd => "application/ld+json",
        }
    }
}

impl fmt::Display for ParserFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Turtle => "Turtle",
            Self::JsonLd => "JSON-LD",
        })
    }
}

impl SerializerFormat {
    /// Looks up the serializer for a media type.
    ///
    /// Parameters like `charset` are ignored.
    /// Unknown media types fall back to Turtle; known but unsupported ones are an error.
    ///
    /// ```
    /// use rdfmem::SerializerFormat;
    ///
    /// assert_eq!(
    ///     SerializerFormat::from_media_type("application/ld+json")?,
    ///     SerializerFormat::JsonLd
    /// );
    /// assert_eq!(
    ///     SerializerFormat::from_media_type("text/plain")?,
    ///     SerializerFormat::Turtle
    /// );
    /// assert!(SerializerFormat::from_media_type("text/html").is_err());
    /// # Result::<_, rdfmem::UnsupportedFormatError>::Ok(())
    /// ```
    pub fn from_media_type(media_type: &str) -> Result<Self, UnsupportedFormatError> {
        lookup(&SERIALIZERS, media_type)
            .unwrap_or(Some(Self::Turtle))
            .ok_or_else(|| UnsupportedFormatError {
                media_type: media_type.into(),
            })
    }

    /// The format canonical [IANA media type](https://tools.ietf.org/html/rfc2046).
    #[inline]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::Turtle => "text/turtle",
            Self::JsonLd => "application/ld+json",
            Self::NTriples => "application/n-triples",
        }
    }
}

impl fmt::Display for SerializerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Turtle => "Turtle",
            Self::JsonLd => "JSON-LD",
            Self::NTriples => "N-Triples",
        })
    }
}

/// Returns the media type registered for a file extension, given without the leading dot.
///
/// ```
/// use rdfmem::media_type_from_extension;
///
/// assert_eq!(media_type_from_extension("jsonld"), Some("application/ld+json"));
/// assert_eq!(media_type_from_extension("TTL"), Some("text/turtle"));
/// assert_eq!(media_type_from_extension("txt"), None);
/// ```
pub fn media_type_from_extension(extension: &str) -> Option<&'static str> {
    EXTENSIONS
        .iter()
        .find(|(e, _)| e.eq_ignore_ascii_case(extension))
        .map(|(_, media_type)| *media_type)
}

/// Outer `None` when the media type is not in the table at all.
fn lookup<F: Copy>(table: &[(&str, Option<F>)], media_type: &str) -> Option<Option<F>> {
    let essence = media_type.split(';').next().unwrap_or_default().trim();
    table
        .iter()
        .find(|(m, _)| m.eq_ignore_ascii_case(essence))
        .map(|(_, format)| *format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_media_types_use_turtle() {
        for media_type in ["", "text/plain", "application/octet-stream", "nonsense"] {
            assert_eq!(
                ParserFormat::from_media_type(media_type).unwrap(),
                ParserFormat::Turtle
            );
            assert_eq!(
                SerializerFormat::from_media_type(media_type).unwrap(),
                SerializerFormat::Turtle
            );
        }
    }

    #[test]
    fn disabled_media_types_are_errors() {
        let error = ParserFormat::from_media_type("application/json").unwrap_err();
        assert_eq!(error.media_type(), "application/json");
        assert!(error.to_string().contains("application/json"));
        SerializerFormat::from_media_type("text/html; charset=utf-8").unwrap_err();
    }

    #[test]
    fn media_type_parameters_are_ignored() {
        assert_eq!(
            ParserFormat::from_media_type("Application/LD+JSON ; charset=utf-8").unwrap(),
            ParserFormat::JsonLd
        );
        assert_eq!(
            SerializerFormat::from_media_type("application/n-triples;charset=utf-8").unwrap(),
            SerializerFormat::NTriples
        );
    }

    #[test]
    fn canonical_media_types_round_trip() {
        for format in [ParserFormat::Turtle, ParserFormat::JsonLd] {
            assert_eq!(
                ParserFormat::from_media_type(format.media_type()).unwrap(),
                format
            );
        }
        for format in [
            SerializerFormat::Turtle,
            SerializerFormat::JsonLd,
            SerializerFormat::NTriples,
        ] {
            assert_eq!(
                SerializerFormat::from_media_type(format.media_type()).unwrap(),
                format
            );
        }
    }
}
