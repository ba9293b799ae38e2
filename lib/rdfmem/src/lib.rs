#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod blank_node;
mod conversion;
mod error;
mod format;
pub mod graph;
mod http;
mod literal;
mod named_node;
mod parser;
mod serializer;
mod triple;

pub use crate::blank_node::BlankNode;
pub use crate::error::{
    GraphUriError, LoadError, RdfParseError, RdfSerializeError, RdfSyntaxError,
    UnsupportedFormatError,
};
pub use crate::format::{ACCEPT, ParserFormat, SerializerFormat, media_type_from_extension};
pub use crate::graph::Graph;
pub use crate::http::{HttpClient, TlsVerification};
pub use crate::literal::Literal;
pub use crate::named_node::NamedNode;
pub use crate::serializer::{GraphSerializer, JsonLdLayout, TurtleLayout};
pub use crate::triple::{Term, Triple};
