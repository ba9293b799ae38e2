use crate::blank_node::BlankNode;
use crate::literal::Literal;
use crate::named_node::NamedNode;
use std::fmt;

/// An RDF [term](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-term).
///
/// It is the union of [IRIs](https://www.w3.org/TR/rdf11-concepts/#dfn-iri), [blank nodes](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node) and [literals](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
///
/// Terms of different kinds are never equal.
///
/// The default string formatter is returning an N-Triples, Turtle, and SPARQL compatible representation:
/// ```
/// use rdfmem::{NamedNode, Term};
///
/// assert_eq!(
///     "<http://example.com/foo>",
///     Term::from(NamedNode::new("http://example.com/foo")).to_string()
/// );
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Term {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl Term {
    #[inline]
    pub fn is_named_node(&self) -> bool {
        matches!(self, Self::NamedNode(_))
    }

    #[inline]
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Self::BlankNode(_))
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns the unadorned value of the term: the IRI, the blank node id or the literal lexical form.
    ///
    /// ```
    /// use rdfmem::{BlankNode, Literal, NamedNode, Term};
    ///
    /// assert_eq!(Term::from(NamedNode::new("http://example.com")).raw_value(), "http://example.com");
    /// assert_eq!(Term::from(BlankNode::new("b1")).raw_value(), "b1");
    /// assert_eq!(Term::from(Literal::new_language_tagged_literal("chat", "fr")).raw_value(), "chat");
    /// ```
    #[inline]
    pub fn raw_value(&self) -> &str {
        match self {
            Self::NamedNode(node) => node.as_str(),
            Self::BlankNode(node) => node.as_str(),
            Self::Literal(literal) => literal.value(),
        }
    }
}

impl fmt::Display for Term {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(node) => node.fmt(f),
            Self::BlankNode(node) => node.fmt(f),
            Self::Literal(literal) => literal.fmt(f),
        }
    }
}

impl From<NamedNode> for Term {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<BlankNode> for Term {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl From<Literal> for Term {
    #[inline]
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

/// An [RDF triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple).
///
/// The subject is conventionally an IRI or a blank node and the predicate an IRI,
/// but any [`Term`] is accepted in every position.
/// Two triples are equal if their subjects, predicates and objects are pairwise equal.
///
/// The default string formatter is returning an N-Triples compatible representation:
/// ```
/// use rdfmem::{NamedNode, Triple};
///
/// assert_eq!(
///     "<http://example.com/s> <http://example.com/p> <http://example.com/o> .",
///     Triple::new(
///         NamedNode::new("http://example.com/s"),
///         NamedNode::new("http://example.com/p"),
///         NamedNode::new("http://example.com/o"),
///     )
///     .to_string()
/// );
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Triple {
    /// The [subject](https://www.w3.org/TR/rdf11-concepts/#dfn-subject) of this triple.
    pub subject: Term,

    /// The [predicate](https://www.w3.org/TR/rdf11-concepts/#dfn-predicate) of this triple.
    pub predicate: Term,

    /// The [object](https://www.w3.org/TR/rdf11-concepts/#dfn-object) of this triple.
    pub object: Term,
}

impl Triple {
    /// Builds an RDF [triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple).
    #[inline]
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Checks if the triple matches a pattern where `None` stands for "any term".
    #[inline]
    pub fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> bool {
        subject.is_none_or(|s| self.subject == *s)
            && predicate.is_none_or(|p| self.predicate == *p)
            && object.is_none_or(|o| self.object == *o)
    }
}

impl fmt::Display for Triple {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
