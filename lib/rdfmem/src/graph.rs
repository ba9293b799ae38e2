//! [In-memory implementation](super::Graph) of [RDF graphs](https://www.w3.org/TR/rdf11-concepts/#dfn-graph).
//!
//! Usage example:
//! ```
//! use rdfmem::*;
//!
//! let mut graph = Graph::new("https://example.org")?;
//!
//! // insertion
//! let ex = Term::from(NamedNode::new("http://example.com"));
//! graph.insert_triple(ex.clone(), ex.clone(), ex.clone());
//!
//! // pattern lookup
//! let results = graph.all(Some(&ex), None, None);
//! assert_eq!(vec![&Triple::new(ex.clone(), ex.clone(), ex)], results);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

use crate::error::{GraphUriError, LoadError, RdfParseError, RdfSerializeError};
use crate::format::{ParserFormat, SerializerFormat, media_type_from_extension};
use crate::http::HttpClient;
use crate::named_node::NamedNode;
use crate::parser::parse_triples;
use crate::serializer::GraphSerializer;
use crate::triple::{Term, Triple};
use rustc_hash::FxHashSet;
use std::io::{Read, Write};
use std::path::Path;
use std::{fmt, fs};
use tracing::{debug, warn};

/// An in-memory [RDF graph](https://www.w3.org/TR/rdf11-concepts/#dfn-graph) identified by a base URI.
///
/// Triples are deduplicated by value: inserting a triple equal to one already in the graph is a no-op.
/// Iteration order is unspecified. It is stable for a given sequence of insertions and removals
/// within a process run but must not be relied upon across runs.
///
/// The graph has no internal locking: concurrent mutation requires external synchronization,
/// for example a [`Mutex`](std::sync::Mutex) around the whole graph.
///
/// Usage example:
/// ```
/// use rdfmem::*;
///
/// let mut graph = Graph::new("https://example.org")?;
/// let a = Term::from(NamedNode::new("a"));
/// let b = Term::from(NamedNode::new("b"));
/// graph.insert_triple(a.clone(), b.clone(), Literal::new_simple_literal("c"));
/// graph.insert_triple(a.clone(), b.clone(), Literal::new_simple_literal("c"));
/// assert_eq!(graph.len(), 1);
///
/// let found = graph.one(None, Some(&b), None).unwrap();
/// assert_eq!(found.subject, a);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    uri: String,
    term: Term,
    triples: FxHashSet<Triple>,
}

impl Graph {
    /// Creates an empty graph with an `http:` or `https:` base URI.
    ///
    /// The URI must be a valid absolute IRI, as it is the base IRI of every parsed document.
    ///
    /// ```
    /// use rdfmem::Graph;
    ///
    /// assert!(Graph::new("https://example.org").is_ok());
    /// assert!(Graph::new("urn:example").is_err());
    /// assert!(Graph::new("http://example.org/my graph").is_err());
    /// ```
    pub fn new(uri: impl Into<String>) -> Result<Self, GraphUriError> {
        let uri = uri.into();
        if !uri.starts_with("http:") && !uri.starts_with("https:") {
            return Err(GraphUriError::NotHttp { uri });
        }
        if let Err(error) = oxrdf::NamedNode::new(uri.as_str()) {
            return Err(GraphUriError::InvalidIri { uri, error });
        }
        Ok(Self::new_unchecked(uri))
    }

    /// Creates an empty graph without validating the base URI.
    ///
    /// [`Graph::new()`] is the validating version of this constructor.
    pub fn new_unchecked(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        Self {
            term: NamedNode::new(uri.clone()).into(),
            uri,
            triples: FxHashSet::default(),
        }
    }

    /// The base URI of the graph.
    #[inline]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The graph identity as an IRI term built from its base URI.
    #[inline]
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// Returns the number of triples in this graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Checks if this graph contains no triple.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Returns all the triples contained by the graph.
    ///
    /// Each call starts a new pass over the store.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.triples.iter(),
        }
    }

    /// Checks if the graph contains the given triple.
    #[inline]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Adds a triple to the graph.
    ///
    /// Returns `false` if an equal triple was already there.
    #[inline]
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Adds a triple made of the given subject, predicate and object.
    #[inline]
    pub fn insert_triple(
        &mut self,
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    /// Removes a triple from the graph.
    ///
    /// Returns `false` if the triple was not in the graph.
    #[inline]
    pub fn remove(&mut self, triple: &Triple) -> bool {
        self.triples.remove(triple)
    }

    /// Clears the graph.
    pub fn clear(&mut self) {
        self.triples.clear()
    }

    /// Inserts every triple of `other` into this graph.
    pub fn merge(&mut self, other: &Self) {
        self.triples.extend(other.triples.iter().cloned());
    }

    /// Returns the first triple matching a pattern, `None` standing for "any term".
    ///
    /// With three wildcards, any triple of the graph is returned.
    /// ```
    /// use rdfmem::*;
    ///
    /// let mut graph = Graph::new("https://example.org")?;
    /// assert!(graph.one(None, None, None).is_none());
    /// graph.insert_triple(NamedNode::new("a"), NamedNode::new("b"), NamedNode::new("c"));
    /// assert!(graph.one(None, None, None).is_some());
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    pub fn one(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Option<&Triple> {
        if let (Some(subject), Some(predicate), Some(object)) = (subject, predicate, object) {
            return self
                .triples
                .get(&Triple::new(subject.clone(), predicate.clone(), object.clone()));
        }
        self.iter().find(|t| t.matches(subject, predicate, object))
    }

    /// Returns all the triples matching a pattern, `None` standing for "any term".
    ///
    /// A pattern made of three wildcards matches nothing here: use [`Graph::iter`] to get every triple.
    /// ```
    /// use rdfmem::*;
    ///
    /// let mut graph = Graph::new("https://example.org")?;
    /// graph.insert_triple(NamedNode::new("a"), NamedNode::new("b"), NamedNode::new("c"));
    /// assert!(graph.all(None, None, None).is_empty());
    /// assert_eq!(graph.all(Some(&NamedNode::new("a").into()), None, None).len(), 1);
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    pub fn all(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Vec<&Triple> {
        if subject.is_none() && predicate.is_none() && object.is_none() {
            return Vec::new();
        }
        self.iter()
            .filter(|t| t.matches(subject, predicate, object))
            .collect()
    }

    /// Parses a document and adds its triples to the graph.
    ///
    /// The parser is chosen from the media type, Turtle being the fallback for unknown media types.
    /// Relative IRIs are resolved against the graph URI.
    /// The document is fully parsed before any insertion: on error the graph is left unchanged.
    /// JSON-LD named graphs are not kept apart: their triples are added to this graph.
    ///
    /// ```
    /// use rdfmem::*;
    ///
    /// let mut graph = Graph::new("https://example.org/")?;
    /// graph.parse(
    ///     "<#me> <http://xmlns.com/foaf/0.1/name> \"Test\" .".as_bytes(),
    ///     "text/turtle",
    /// )?;
    /// assert!(graph.contains(&Triple::new(
    ///     NamedNode::new("https://example.org/#me"),
    ///     NamedNode::new("http://xmlns.com/foaf/0.1/name"),
    ///     Literal::new_simple_literal("Test"),
    /// )));
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    pub fn parse(&mut self, reader: impl Read, media_type: &str) -> Result<(), RdfParseError> {
        let triples = read_triples(reader, media_type, &self.uri)?;
        self.triples.extend(triples);
        Ok(())
    }

    /// Fetches a document over HTTP and adds its triples to the graph.
    ///
    /// The fragment of `uri` is dropped before the request. The `Content-Type` of the response selects the parser.
    /// A graph with an empty URI takes the URI of the document once it is loaded.
    /// On error the graph is left unchanged, URI included.
    pub fn load_uri(&mut self, uri: &str, client: &HttpClient) -> Result<(), LoadError> {
        let document = strip_fragment(uri);
        let (content_type, body) = client.get(document)?;
        let base = if self.uri.is_empty() {
            document
        } else {
            &self.uri
        };
        let triples = read_triples(body, &content_type, base)?;
        if self.uri.is_empty() {
            document.clone_into(&mut self.uri);
            self.term = NamedNode::new(document).into();
        }
        self.triples.extend(triples);
        Ok(())
    }

    /// Loads a local document, choosing the parser from the file extension.
    ///
    /// Missing paths, directories, unreadable files and invalid documents are logged and ignored:
    /// this method never fails and leaves the graph unchanged in these cases.
    pub fn read_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot access file");
                return;
            }
        };
        if metadata.is_dir() {
            warn!(path = %path.display(), "not loading a directory");
            return;
        }
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot open file");
                return;
            }
        };
        let media_type = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(media_type_from_extension)
            .unwrap_or("text/turtle");
        if let Err(e) = self.parse(file, media_type) {
            warn!(path = %path.display(), error = %e, "cannot parse file");
        }
    }

    /// Serializes the graph, choosing the serializer from the media type.
    ///
    /// Turtle is the fallback for unknown media types.
    /// See [`GraphSerializer`] for layout options.
    pub fn serialize<W: Write>(&self, writer: W, media_type: &str) -> Result<W, RdfSerializeError> {
        let format = SerializerFormat::from_media_type(media_type)?;
        Ok(GraphSerializer::from_format(format).serialize_to_writer(self, writer)?)
    }
}

impl PartialEq for Graph {
    /// Graphs are equal when they have the same URI and the same triples.
    /// Blank node identifiers are compared as they are: isomorphic graphs with different labels are not equal.
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri && self.triples == other.triples
    }
}

impl Eq for Graph {}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter)
    }
}

/// Writes the graph in [N-Triples](https://www.w3.org/TR/n-triples/), one triple per line.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self {
            writeln!(f, "{t}")?;
        }
        Ok(())
    }
}

/// Iterator returned by [`Graph::iter`].
pub struct Iter<'a> {
    inner: std::collections::hash_set::Iter<'a, Triple>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Triple;

    #[inline]
    fn next(&mut self) -> Option<&'a Triple> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

fn read_triples(
    reader: impl Read,
    media_type: &str,
    base_iri: &str,
) -> Result<Vec<Triple>, RdfParseError> {
    let format = ParserFormat::from_media_type(media_type)?;
    let triples = parse_triples(reader, format, base_iri)?;
    debug!(%format, count = triples.len(), base_iri, "parsed document");
    Ok(triples)
}

/// Drops everything from the first `#` on.
pub(crate) fn strip_fragment(uri: &str) -> &str {
    uri.split_once('#').map_or(uri, |(document, _)| document)
}
