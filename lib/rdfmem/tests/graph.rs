use rdfmem::*;
use std::fs;

const TEST_URI: &str = "https://example.org";
const SIMPLE_TURTLE: &str =
    "@prefix foaf: <http://xmlns.com/foaf/0.1/> .\n<#me> a foaf:Person ;\nfoaf:name \"Test\" .";

fn iri(value: &str) -> Term {
    NamedNode::new(value).into()
}

fn me() -> Term {
    iri(&format!("{TEST_URI}#me"))
}

#[test]
fn parse_turtle() {
    let mut g = Graph::new(TEST_URI).unwrap();
    g.parse(SIMPLE_TURTLE.as_bytes(), "text/turtle").unwrap();
    assert_eq!(g.len(), 2);
    assert!(
        g.one(
            Some(&me()),
            Some(&iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type")),
            Some(&iri("http://xmlns.com/foaf/0.1/Person")),
        )
        .is_some()
    );
    assert!(
        g.one(
            Some(&me()),
            Some(&iri("http://xmlns.com/foaf/0.1/name")),
            Some(&Literal::new_simple_literal("Test").into()),
        )
        .is_some()
    );
}

#[test]
fn parse_turtle_with_prefix() {
    let mut g = Graph::new(TEST_URI).unwrap();
    g.parse(
        "@prefix test: <http://example.org/test#> .\n<#me> test:foo \"Test\" .".as_bytes(),
        "text/turtle",
    )
    .unwrap();
    assert_eq!(g.len(), 1);
    assert!(
        g.one(
            Some(&me()),
            Some(&iri("http://example.org/test#foo")),
            Some(&Literal::new_simple_literal("Test").into()),
        )
        .is_some()
    );
}

#[test]
fn parse_is_additive_and_deduplicating() {
    let mut g = Graph::new(TEST_URI).unwrap();
    g.parse(SIMPLE_TURTLE.as_bytes(), "text/turtle").unwrap();
    g.parse(SIMPLE_TURTLE.as_bytes(), "text/turtle").unwrap();
    assert_eq!(g.len(), 2);
    g.parse("<#me> <#knows> <#you> .".as_bytes(), "text/n3")
        .unwrap();
    assert_eq!(g.len(), 3);
}

#[test]
fn parse_unknown_media_type_as_turtle() {
    let mut g = Graph::new(TEST_URI).unwrap();
    g.parse(SIMPLE_TURTLE.as_bytes(), "text/plain").unwrap();
    assert_eq!(g.len(), 2);
}

#[test]
fn parse_disabled_media_type() {
    let mut g = Graph::new(TEST_URI).unwrap();
    let error = g
        .parse(SIMPLE_TURTLE.as_bytes(), "application/json")
        .unwrap_err();
    assert!(matches!(error, RdfParseError::UnsupportedFormat(_)));
    assert!(g.is_empty());
}

#[test]
fn failed_parse_leaves_graph_unchanged() {
    let mut g = Graph::new(TEST_URI).unwrap();
    g.insert_triple(iri("a"), iri("b"), iri("c"));
    let before = g.clone();
    let error = g
        .parse(
            "<#x> <#y> <#z> .\n<#u> <#v> <#w> .\n<#broken> <#p> .".as_bytes(),
            "text/turtle",
        )
        .unwrap_err();
    assert!(matches!(error, RdfParseError::Syntax(_)));
    assert!(!error.to_string().is_empty());
    assert_eq!(g, before);
}

#[test]
fn parse_json_ld() {
    let mut g = Graph::new(TEST_URI).unwrap();
    g.parse(
        r#"{ "@id": "http://example.org/#me", "http://xmlns.com/foaf/0.1/name": "Test" }"#
            .as_bytes(),
        "application/ld+json",
    )
    .unwrap();
    assert_eq!(g.len(), 1);
    assert!(g.contains(&Triple::new(
        iri("http://example.org/#me"),
        iri("http://xmlns.com/foaf/0.1/name"),
        Literal::new_simple_literal("Test"),
    )));
}

#[test]
fn failed_json_ld_parse_leaves_graph_unchanged() {
    let mut g = Graph::new(TEST_URI).unwrap();
    g.parse(
        r#"[{"@id": "http://example.org/#me", "http://xmlns.com/foaf/0.1/name": "Test"}, "#
            .as_bytes(),
        "application/ld+json",
    )
    .unwrap_err();
    assert!(g.is_empty());
}

#[test]
fn serialize_turtle() {
    let mut g = Graph::new(TEST_URI).unwrap();
    g.insert_triple(iri("a"), iri("b"), iri("c"));
    let text = String::from_utf8(g.serialize(Vec::new(), "text/turtle").unwrap()).unwrap();
    assert!(text.contains("<a>\n  <b> <c> ."));
}

#[test]
fn turtle_round_trip() {
    let mut g = Graph::new(TEST_URI).unwrap();
    g.insert_triple(
        iri("http://example.org/a"),
        iri("http://example.org/b"),
        iri("http://example.org/c"),
    );
    g.insert_triple(
        iri("http://example.org/a"),
        iri("http://example.org/b"),
        iri("http://example.org/d"),
    );
    g.insert_triple(
        iri("http://example.org/e"),
        iri("http://example.org/b"),
        Literal::new_language_tagged_literal("multi\nline \"quoted\"", "en"),
    );
    g.insert_triple(
        iri("http://example.org/e"),
        iri("http://example.org/f"),
        Literal::new_typed_literal(
            "42",
            NamedNode::new("http://www.w3.org/2001/XMLSchema#integer"),
        ),
    );

    for layout in [TurtleLayout::Compact, TurtleLayout::Spaced] {
        let text = GraphSerializer::from_format(SerializerFormat::Turtle)
            .with_turtle_layout(layout)
            .serialize_to_writer(&g, Vec::new())
            .unwrap();
        let mut g2 = Graph::new(TEST_URI).unwrap();
        g2.parse(text.as_slice(), "text/turtle").unwrap();
        assert_eq!(g, g2);
    }
}

#[test]
fn json_ld_round_trip() {
    let mut g = Graph::new(TEST_URI).unwrap();
    g.parse(SIMPLE_TURTLE.as_bytes(), "text/turtle").unwrap();
    g.insert_triple(
        me(),
        iri("http://xmlns.com/foaf/0.1/nick"),
        Literal::new_language_tagged_literal("test", "en"),
    );
    g.insert_triple(
        BlankNode::new("n9"),
        iri("http://xmlns.com/foaf/0.1/name"),
        Literal::new_language_tagged_literal("test", "en"),
    );
    assert_eq!(g.len(), 4);

    for layout in [JsonLdLayout::PerTriple, JsonLdLayout::PerSubject] {
        let json = GraphSerializer::from_format(SerializerFormat::JsonLd)
            .with_json_ld_layout(layout)
            .serialize_to_writer(&g, Vec::new())
            .unwrap();
        let mut g2 = Graph::new(TEST_URI).unwrap();
        g2.parse(json.as_slice(), "application/ld+json").unwrap();
        assert_eq!(g2.len(), 4);
        let blank = g2
            .one(
                None,
                Some(&iri("http://xmlns.com/foaf/0.1/name")),
                Some(&Literal::new_language_tagged_literal("test", "en").into()),
            )
            .unwrap();
        assert!(blank.subject.is_blank_node());
        assert!(
            g2.one(
                Some(&me()),
                Some(&iri("http://xmlns.com/foaf/0.1/name")),
                Some(&Literal::new_simple_literal("Test").into()),
            )
            .is_some()
        );
    }
}

#[test]
fn ntriples_output_is_valid_turtle() {
    let mut g = Graph::new(TEST_URI).unwrap();
    g.parse(SIMPLE_TURTLE.as_bytes(), "text/turtle").unwrap();
    let text = g.serialize(Vec::new(), "application/n-triples").unwrap();
    assert_eq!(String::from_utf8(text.clone()).unwrap(), g.to_string());
    let mut g2 = Graph::new(TEST_URI).unwrap();
    g2.parse(text.as_slice(), "application/n-triples").unwrap();
    assert_eq!(g, g2);
}

#[test]
fn serialize_disabled_media_type() {
    let g = Graph::new(TEST_URI).unwrap();
    let error = g.serialize(Vec::new(), "text/html").unwrap_err();
    assert!(matches!(error, RdfSerializeError::UnsupportedFormat(_)));
}

#[test]
fn read_turtle_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("card.ttl");
    fs::write(&path, SIMPLE_TURTLE).unwrap();
    let mut g = Graph::new(TEST_URI).unwrap();
    g.read_file(&path);
    assert_eq!(g.len(), 2);
}

#[test]
fn read_json_ld_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("card.jsonld");
    fs::write(
        &path,
        r#"{ "@id": "http://example.org/#me", "http://xmlns.com/foaf/0.1/name": "Test" }"#,
    )
    .unwrap();
    let mut g = Graph::new(TEST_URI).unwrap();
    g.read_file(&path);
    assert_eq!(g.len(), 1);
}

#[test]
fn read_file_without_extension_as_turtle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("card");
    fs::write(&path, SIMPLE_TURTLE).unwrap();
    let mut g = Graph::new(TEST_URI).unwrap();
    g.read_file(&path);
    assert_eq!(g.len(), 2);
}

#[test]
fn read_file_failures_change_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut g = Graph::new(TEST_URI).unwrap();
    g.insert_triple(iri("a"), iri("b"), iri("c"));
    let before = g.clone();

    g.read_file(dir.path().join("missing.ttl"));
    assert_eq!(g, before);

    g.read_file(dir.path());
    assert_eq!(g, before);

    let invalid = dir.path().join("invalid.ttl");
    fs::write(&invalid, "<a> <b> .").unwrap();
    g.read_file(&invalid);
    assert_eq!(g, before);
}

#[test]
fn oxrdf_interop() {
    let mut g = Graph::new(TEST_URI).unwrap();
    g.parse(SIMPLE_TURTLE.as_bytes(), "text/turtle").unwrap();
    for t in &g {
        let object = oxrdf::Term::from(&t.object);
        assert_eq!(Term::from(object), t.object);
    }
    let name = oxrdf::Term::from(&Term::from(Literal::new_simple_literal("Test")));
    assert_eq!(name, oxrdf::Literal::new_simple_literal("Test").into());

    let person = oxrdf::Triple::new(
        oxrdf::NamedNode::new_unchecked(format!("{TEST_URI}#me")),
        oxrdf::NamedNode::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
        oxrdf::NamedNode::new_unchecked("http://xmlns.com/foaf/0.1/Person"),
    );
    assert!(g.contains(&Triple::from(person)));
}
