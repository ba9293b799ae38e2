//! Conversions between the terms of this crate and the [`oxrdf`] terms produced by the Turtle and JSON-LD parsers.

use crate::blank_node::BlankNode;
use crate::literal::Literal;
use crate::named_node::NamedNode;
use crate::triple::{Term, Triple};
use oxrdf::vocab::xsd;

pub(crate) fn convert_triple(value: oxrdf::Triple) -> Triple {
    Triple::new(
        convert_term(value.subject.into()),
        convert_named_node(value.predicate),
        convert_term(value.object),
    )
}

pub(crate) fn convert_quad(value: oxrdf::Quad) -> Triple {
    Triple::new(
        convert_term(value.subject.into()),
        convert_named_node(value.predicate),
        convert_term(value.object),
    )
}

fn convert_term(value: oxrdf::Term) -> Term {
    match value {
        oxrdf::Term::NamedNode(v) => convert_named_node(v).into(),
        oxrdf::Term::BlankNode(v) => convert_blank_node(v).into(),
        oxrdf::Term::Literal(v) => convert_literal(&v).into(),
    }
}

fn convert_named_node(value: oxrdf::NamedNode) -> NamedNode {
    NamedNode::new(value.into_string())
}

fn convert_blank_node(value: oxrdf::BlankNode) -> BlankNode {
    BlankNode::new(value.into_string())
}

// xsd:string literals are RDF 1.1 simple literals and language-tagged strings carry rdf:langString
fn convert_literal(value: &oxrdf::Literal) -> Literal {
    if let Some(language) = value.language() {
        Literal::new_language_tagged_literal(value.value(), language)
    } else if value.datatype() == xsd::STRING {
        Literal::new_simple_literal(value.value())
    } else {
        Literal::new_typed_literal(value.value(), NamedNode::new(value.datatype().as_str()))
    }
}

impl From<&NamedNode> for oxrdf::NamedNode {
    #[inline]
    fn from(node: &NamedNode) -> Self {
        Self::new_unchecked(node.as_str())
    }
}

impl From<&BlankNode> for oxrdf::BlankNode {
    #[inline]
    fn from(node: &BlankNode) -> Self {
        Self::new_unchecked(node.as_str())
    }
}

/// A literal with both a language tag and a datatype keeps only its datatype.
impl From<&Literal> for oxrdf::Literal {
    fn from(literal: &Literal) -> Self {
        if let Some(datatype) = literal.datatype() {
            Self::new_typed_literal(literal.value(), oxrdf::NamedNode::from(datatype))
        } else if let Some(language) = literal.language() {
            Self::new_language_tagged_literal_unchecked(
                literal.value(),
                language.trim_start_matches('@'),
            )
        } else {
            Self::new_simple_literal(literal.value())
        }
    }
}

impl From<&Term> for oxrdf::Term {
    #[inline]
    fn from(term: &Term) -> Self {
        match term {
            Term::NamedNode(node) => oxrdf::NamedNode::from(node).into(),
            Term::BlankNode(node) => oxrdf::BlankNode::from(node).into(),
            Term::Literal(literal) => oxrdf::Literal::from(literal).into(),
        }
    }
}

impl From<oxrdf::Term> for Term {
    #[inline]
    fn from(term: oxrdf::Term) -> Self {
        convert_term(term)
    }
}

impl From<oxrdf::Triple> for Triple {
    #[inline]
    fn from(triple: oxrdf::Triple) -> Self {
        convert_triple(triple)
    }
}
