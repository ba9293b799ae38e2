use crate::format::SerializerFormat;
use crate::graph::Graph;
use crate::triple::{Term, Triple};
use json_event_parser::{JsonEvent, WriterJsonSerializer};
use rustc_hash::FxHashMap;
use std::io::{self, Write};
use tracing::debug;

/// Layout of the Turtle-style output.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Default)]
pub enum TurtleLayout {
    /// Subject blocks follow each other directly.
    #[default]
    Compact,
    /// Subject blocks are separated by a blank line.
    Spaced,
}

/// Shape of the JSON-LD-style output.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Default)]
pub enum JsonLdLayout {
    /// One node object per triple, carrying its single predicate and object.
    #[default]
    PerTriple,
    /// One node object per subject, carrying all its predicates.
    PerSubject,
}

/// Writes a [`Graph`] as Turtle-style, JSON-LD-style or N-Triples text.
///
/// The Turtle-style output groups triples by subject:
/// ```
/// use rdfmem::*;
///
/// let mut graph = Graph::new("https://example.org")?;
/// graph.insert_triple(NamedNode::new("a"), NamedNode::new("b"), NamedNode::new("c"));
/// let buffer = GraphSerializer::from_format(SerializerFormat::Turtle)
///     .serialize_to_writer(&graph, Vec::new())?;
/// assert_eq!(String::from_utf8(buffer)?, "<a>\n  <b> <c> .\n");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
///
/// The JSON-LD-style output is an array of node objects:
/// ```
/// use rdfmem::*;
///
/// let mut graph = Graph::new("https://example.org")?;
/// graph.insert_triple(NamedNode::new("a"), NamedNode::new("b"), NamedNode::new("c"));
/// let buffer = GraphSerializer::from_format(SerializerFormat::JsonLd)
///     .serialize_to_writer(&graph, Vec::new())?;
/// assert_eq!(String::from_utf8(buffer)?, r#"[{"@id":"a","b":[{"@id":"c"}]}]"#);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct GraphSerializer {
    format: SerializerFormat,
    turtle_layout: TurtleLayout,
    json_ld_layout: JsonLdLayout,
}

impl GraphSerializer {
    #[inline]
    pub fn from_format(format: SerializerFormat) -> Self {
        Self {
            format,
            turtle_layout: TurtleLayout::default(),
            json_ld_layout: JsonLdLayout::default(),
        }
    }

    /// Sets the layout used when writing Turtle.
    #[inline]
    pub fn with_turtle_layout(mut self, layout: TurtleLayout) -> Self {
        self.turtle_layout = layout;
        self
    }

    /// Sets the shape used when writing JSON-LD.
    #[inline]
    pub fn with_json_ld_layout(mut self, layout: JsonLdLayout) -> Self {
        self.json_ld_layout = layout;
        self
    }

    /// Writes the whole graph and returns the writer.
    pub fn serialize_to_writer<W: Write>(&self, graph: &Graph, mut writer: W) -> io::Result<W> {
        debug!(format = %self.format, count = graph.len(), uri = graph.uri(), "serializing graph");
        match self.format {
            SerializerFormat::Turtle => {
                write_turtle(graph, &mut writer, self.turtle_layout)?;
                Ok(writer)
            }
            SerializerFormat::NTriples => {
                for t in graph {
                    writeln!(writer, "{t}")?;
                }
                Ok(writer)
            }
            SerializerFormat::JsonLd => write_json_ld(graph, writer, self.json_ld_layout),
        }
    }
}

/// Groups the triples by canonical subject text, in the order subjects are first seen.
fn group_by_subject(graph: &Graph) -> Vec<(String, Vec<&Triple>)> {
    let mut groups: Vec<(String, Vec<&Triple>)> = Vec::new();
    let mut positions = FxHashMap::<String, usize>::default();
    for t in graph {
        let subject = t.subject.to_string();
        if let Some(&position) = positions.get(&subject) {
            groups[position].1.push(t);
        } else {
            positions.insert(subject.clone(), groups.len());
            groups.push((subject, vec![t]));
        }
    }
    groups
}

fn write_turtle(graph: &Graph, writer: &mut impl Write, layout: TurtleLayout) -> io::Result<()> {
    for (i, (subject, triples)) in group_by_subject(graph).into_iter().enumerate() {
        if i > 0 && layout == TurtleLayout::Spaced {
            writeln!(writer)?;
        }
        writeln!(writer, "{subject}")?;
        let last = triples.len() - 1;
        for (j, t) in triples.into_iter().enumerate() {
            let end = if j == last { '.' } else { ';' };
            writeln!(writer, "  {} {} {end}", t.predicate, t.object)?;
        }
    }
    Ok(())
}

fn write_json_ld<W: Write>(graph: &Graph, writer: W, layout: JsonLdLayout) -> io::Result<W> {
    let mut writer = WriterJsonSerializer::new(writer);
    writer.serialize_event(JsonEvent::StartArray)?;
    match layout {
        JsonLdLayout::PerTriple => {
            for t in graph {
                writer.serialize_event(JsonEvent::StartObject)?;
                writer.serialize_event(JsonEvent::ObjectKey("@id".into()))?;
                writer.serialize_event(JsonEvent::String(id_value(&t.subject).into()))?;
                writer.serialize_event(JsonEvent::ObjectKey(t.predicate.raw_value().into()))?;
                writer.serialize_event(JsonEvent::StartArray)?;
                write_object(&t.object, &mut writer)?;
                writer.serialize_event(JsonEvent::EndArray)?;
                writer.serialize_event(JsonEvent::EndObject)?;
            }
        }
        JsonLdLayout::PerSubject => {
            for (_, triples) in group_by_subject(graph) {
                writer.serialize_event(JsonEvent::StartObject)?;
                writer.serialize_event(JsonEvent::ObjectKey("@id".into()))?;
                writer.serialize_event(JsonEvent::String(id_value(&triples[0].subject).into()))?;
                for (predicate, objects) in group_by_predicate(&triples) {
                    writer.serialize_event(JsonEvent::ObjectKey(predicate.raw_value().into()))?;
                    writer.serialize_event(JsonEvent::StartArray)?;
                    for object in objects {
                        write_object(object, &mut writer)?;
                    }
                    writer.serialize_event(JsonEvent::EndArray)?;
                }
                writer.serialize_event(JsonEvent::EndObject)?;
            }
        }
    }
    writer.serialize_event(JsonEvent::EndArray)?;
    writer.finish()
}

fn group_by_predicate<'a>(triples: &[&'a Triple]) -> Vec<(&'a Term, Vec<&'a Term>)> {
    let mut groups: Vec<(&Term, Vec<&Term>)> = Vec::new();
    for t in triples {
        if let Some((_, objects)) = groups.iter_mut().find(|(p, _)| *p == &t.predicate) {
            objects.push(&t.object);
        } else {
            groups.push((&t.predicate, vec![&t.object]));
        }
    }
    groups
}

fn write_object<W: Write>(object: &Term, writer: &mut WriterJsonSerializer<W>) -> io::Result<()> {
    writer.serialize_event(JsonEvent::StartObject)?;
    if let Term::Literal(literal) = object {
        writer.serialize_event(JsonEvent::ObjectKey("@value".into()))?;
        writer.serialize_event(JsonEvent::String(literal.value().into()))?;
        if let Some(datatype) = literal.datatype() {
            writer.serialize_event(JsonEvent::ObjectKey("@type".into()))?;
            writer.serialize_event(JsonEvent::String(datatype.as_str().into()))?;
        }
        if let Some(language) = literal.language() {
            writer.serialize_event(JsonEvent::ObjectKey("@language".into()))?;
            writer.serialize_event(JsonEvent::String(language.trim_start_matches('@').into()))?;
        }
    } else {
        writer.serialize_event(JsonEvent::ObjectKey("@id".into()))?;
        writer.serialize_event(JsonEvent::String(id_value(object).into()))?;
    }
    writer.serialize_event(JsonEvent::EndObject)
}

/// Blank nodes use the JSON-LD `_:` prefix so that they are read back as blank nodes.
fn id_value(term: &Term) -> String {
    match term {
        Term::BlankNode(node) => node.to_string(),
        Term::NamedNode(_) | Term::Literal(_) => term.raw_value().into(),
    }
}
