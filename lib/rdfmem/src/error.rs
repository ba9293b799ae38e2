use oxrdf::IriParseError;
use std::io;

/// An error raised when a [`Graph`](crate::Graph) is built from a base URI that is not a valid HTTP(S) IRI.
#[derive(Debug, thiserror::Error)]
pub enum GraphUriError {
    /// The URI scheme is neither `http` nor `https`.
    #[error("Non http graphs are not allowed: {uri}")]
    NotHttp { uri: String },
    /// The URI is not a valid absolute IRI.
    #[error("Invalid graph URI '{uri}': {error}")]
    InvalidIri {
        uri: String,
        #[source]
        error: IriParseError,
    },
}

impl GraphUriError {
    /// The rejected URI.
    #[inline]
    pub fn uri(&self) -> &str {
        match self {
            Self::NotHttp { uri } | Self::InvalidIri { uri, .. } => uri,
        }
    }
}

/// An error raised when a media type maps to no parser or serializer, or to a disabled one.
#[derive(Debug, thiserror::Error)]
#[error("{media_type} is not supported")]
pub struct UnsupportedFormatError {
    pub(crate) media_type: String,
}

impl UnsupportedFormatError {
    /// The offending media type, as given by the caller.
    #[inline]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}

/// Error returned by [`Graph::parse`](crate::Graph::parse).
#[derive(Debug, thiserror::Error)]
pub enum RdfParseError {
    /// I/O error while reading the input.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// An error in the document syntax, as reported by the underlying parser.
    #[error(transparent)]
    Syntax(#[from] RdfSyntaxError),
    /// The media type has no parser.
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),
}

impl From<oxttl::TurtleParseError> for RdfParseError {
    #[inline]
    fn from(error: oxttl::TurtleParseError) -> Self {
        match error {
            oxttl::TurtleParseError::Syntax(e) => Self::Syntax(e.into()),
            oxttl::TurtleParseError::Io(e) => Self::Io(e),
        }
    }
}

impl From<oxjsonld::JsonLdSyntaxError> for RdfParseError {
    #[inline]
    fn from(error: oxjsonld::JsonLdSyntaxError) -> Self {
        Self::Syntax(error.into())
    }
}

/// An error in the syntax of the parsed document.
///
/// The message is the one of the underlying parser, unchanged.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct RdfSyntaxError(#[from] SyntaxErrorKind);

#[derive(Debug, thiserror::Error)]
enum SyntaxErrorKind {
    #[error(transparent)]
    Turtle(#[from] oxttl::TurtleSyntaxError),
    #[error(transparent)]
    JsonLd(#[from] oxjsonld::JsonLdSyntaxError),
    #[error("Invalid base IRI '{iri}': {error}")]
    InvalidBaseIri {
        iri: String,
        #[source]
        error: IriParseError,
    },
}

impl RdfSyntaxError {
    pub(crate) fn invalid_base_iri(iri: impl Into<String>, error: IriParseError) -> Self {
        SyntaxErrorKind::InvalidBaseIri {
            iri: iri.into(),
            error,
        }
        .into()
    }
}

impl From<oxttl::TurtleSyntaxError> for RdfSyntaxError {
    #[inline]
    fn from(error: oxttl::TurtleSyntaxError) -> Self {
        Self(error.into())
    }
}

impl From<oxjsonld::JsonLdSyntaxError> for RdfSyntaxError {
    #[inline]
    fn from(error: oxjsonld::JsonLdSyntaxError) -> Self {
        Self(error.into())
    }
}

impl From<RdfParseError> for io::Error {
    #[inline]
    fn from(error: RdfParseError) -> Self {
        match error {
            RdfParseError::Io(error) => error,
            RdfParseError::Syntax(error) => Self::new(io::ErrorKind::InvalidData, error),
            RdfParseError::UnsupportedFormat(error) => Self::new(io::ErrorKind::Unsupported, error),
        }
    }
}

/// Error returned by [`Graph::serialize`](crate::Graph::serialize).
#[derive(Debug, thiserror::Error)]
pub enum RdfSerializeError {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The media type has no serializer.
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),
}

/// Error returned by [`Graph::load_uri`](crate::Graph::load_uri).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Transport-level failure, TLS failures included.
    #[error(transparent)]
    Network(io::Error),
    /// The server answered with a status other than 200.
    #[error("Could not fetch graph from {uri} - HTTP {status}")]
    HttpStatus { uri: String, status: u16 },
    /// The fetched document could not be parsed.
    #[error(transparent)]
    Parse(#[from] RdfParseError),
}
