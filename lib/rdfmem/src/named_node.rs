use std::fmt;

/// An RDF [IRI reference](https://www.w3.org/TR/rdf11-concepts/#dfn-iri).
///
/// The IRI is stored as given: it may be absolute or relative and is not validated.
/// Two IRI references are equal if and only if their strings are equal.
///
/// The default string formatter is returning an N-Triples, Turtle, and SPARQL compatible representation:
/// ```
/// use rdfmem::NamedNode;
///
/// assert_eq!(
///     "<http://example.com/foo>",
///     NamedNode::new("http://example.com/foo").to_string()
/// );
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Hash)]
pub struct NamedNode {
    iri: String,
}

impl NamedNode {
    /// Builds an RDF IRI reference from a string.
    #[inline]
    pub fn new(iri: impl Into<String>) -> Self {
        Self { iri: iri.into() }
    }

    /// Returns the IRI without the enclosing angle brackets.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.iri.as_str()
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.iri
    }
}

impl fmt::Display for NamedNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

impl PartialEq<str> for NamedNode {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for NamedNode {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<NamedNode> for &str {
    #[inline]
    fn eq(&self, other: &NamedNode) -> bool {
        *self == other.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_iris_are_kept_verbatim() {
        let node = NamedNode::new("foo#b");
        assert_eq!(node.as_str(), "foo#b");
        assert_eq!(node.to_string(), "<foo#b>");
    }

    #[test]
    fn equality_is_string_equality() {
        assert_eq!(NamedNode::new("http://example.com"), NamedNode::new("http://example.com"));
        assert_ne!(NamedNode::new("http://example.com"), NamedNode::new("http://example.com/"));
        assert_eq!(NamedNode::new("a"), "a");
    }
}
