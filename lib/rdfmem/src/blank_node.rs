use rand::random;
use std::fmt;

/// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node).
///
/// The identifier is opaque and only meaningful inside the document or graph that produced it.
/// Two blank nodes are equal if and only if their identifiers are equal.
///
/// A fresh anonymous blank node is created with [`BlankNode::default()`].
/// Its identifier is drawn from a non-cryptographic pseudo-random generator:
/// collisions inside a session are very unlikely but uniqueness is not guaranteed,
/// neither across processes nor across restarts.
///
/// The default string formatter is returning an N-Triples, Turtle, and SPARQL compatible representation:
/// ```
/// use rdfmem::BlankNode;
///
/// assert_eq!("_:a122", BlankNode::new("a122").to_string());
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Hash)]
pub struct BlankNode {
    id: String,
}

impl BlankNode {
    /// Creates a blank node from an identifier.
    ///
    /// The identifier is not validated.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Returns the underlying ID of this blank node.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.id
    }
}

impl fmt::Display for BlankNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.id)
    }
}

impl Default for BlankNode {
    /// Builds a new anonymous blank node with a pseudo-random id.
    #[inline]
    fn default() -> Self {
        // The prefix keeps the id a valid N-Triples, Turtle and RDF/XML blank node label
        Self::new(format!("anon{:x}", random::<u128>()))
    }
}
