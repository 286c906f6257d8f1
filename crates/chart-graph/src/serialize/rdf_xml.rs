//! RDF/XML writer.

use std::collections::BTreeMap;

use chart_model::{GraphDocument, NAMESPACE_BINDINGS, Node, Triple};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{bound_namespace, is_xml_name, split_iri};
use crate::error::{GraphError, Result};

/// Namespaces declared on the root element: fixed bindings plus `ns1…` for
/// any other predicate namespace.
struct Prefixes {
    generated: BTreeMap<String, String>,
}

impl Prefixes {
    fn collect(doc: &GraphDocument) -> Result<Self> {
        let mut bases: Vec<String> = Vec::new();
        for triple in doc {
            let iri = triple.predicate.as_str();
            if bound_namespace(iri, is_xml_name).is_some() {
                continue;
            }
            let (base, _) =
                split_iri(iri).ok_or_else(|| GraphError::UnserializablePredicate(iri.to_string()))?;
            if !bases.iter().any(|known| known == base) {
                bases.push(base.to_string());
            }
        }
        bases.sort();
        let generated = bases
            .into_iter()
            .enumerate()
            .map(|(index, base)| (base, format!("ns{}", index + 1)))
            .collect();
        Ok(Self { generated })
    }

    fn qname(&self, iri: &str) -> Result<String> {
        if let Some((namespace, local)) = bound_namespace(iri, is_xml_name) {
            return Ok(format!("{}:{local}", namespace.prefix()));
        }
        split_iri(iri)
            .and_then(|(base, local)| {
                self.generated
                    .get(base)
                    .map(|prefix| format!("{prefix}:{local}"))
            })
            .ok_or_else(|| GraphError::UnserializablePredicate(iri.to_string()))
    }
}

/// Encodes `doc` as RDF/XML, one `rdf:Description` per subject.
pub fn write_rdf_xml(doc: &GraphDocument) -> Result<String> {
    let prefixes = Prefixes::collect(doc)?;
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("rdf:RDF");
    let declarations: Vec<(String, &str)> = NAMESPACE_BINDINGS
        .iter()
        .map(|namespace| (format!("xmlns:{}", namespace.prefix()), namespace.base()))
        .chain(
            prefixes
                .generated
                .iter()
                .map(|(base, prefix)| (format!("xmlns:{prefix}"), base.as_str())),
        )
        .collect();
    for (name, base) in &declarations {
        root.push_attribute((name.as_str(), *base));
    }
    xml.write_event(Event::Start(root))?;

    let mut triples = doc.iter().peekable();
    while let Some(first) = triples.next() {
        let mut description = BytesStart::new("rdf:Description");
        match &first.subject {
            Node::Iri(iri) => description.push_attribute(("rdf:about", xml_value(iri.as_str())?)),
            Node::Blank(blank) => {
                description.push_attribute(("rdf:nodeID", blank.label().as_str()))
            }
            Node::Literal(literal) => {
                return Err(GraphError::LiteralSubject(literal.as_str().to_string()));
            }
        }
        xml.write_event(Event::Start(description))?;

        write_property(&mut xml, &prefixes, first)?;
        while let Some(triple) = triples.next_if(|next| next.subject == first.subject) {
            write_property(&mut xml, &prefixes, triple)?;
        }

        xml.write_event(Event::End(BytesEnd::new("rdf:Description")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("rdf:RDF")))?;
    let mut text = String::from_utf8(xml.into_inner())?;
    text.push('\n');
    Ok(text)
}

/// Characters allowed by the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || ('\u{20}'..='\u{D7FF}').contains(&c)
        || ('\u{E000}'..='\u{FFFD}').contains(&c)
        || c >= '\u{10000}'
}

fn xml_value(value: &str) -> Result<&str> {
    if value.chars().all(is_xml_char) {
        Ok(value)
    } else {
        Err(GraphError::NonXmlCharacter(value.to_string()))
    }
}

fn write_property(
    xml: &mut Writer<Vec<u8>>,
    prefixes: &Prefixes,
    triple: &Triple,
) -> Result<()> {
    let name = prefixes.qname(triple.predicate.as_str())?;
    let mut element = BytesStart::new(name.as_str());
    match &triple.object {
        Node::Iri(iri) => {
            element.push_attribute(("rdf:resource", xml_value(iri.as_str())?));
            xml.write_event(Event::Empty(element))?;
        }
        Node::Blank(blank) => {
            element.push_attribute(("rdf:nodeID", blank.label().as_str()));
            xml.write_event(Event::Empty(element))?;
        }
        Node::Literal(literal) if literal.as_str().is_empty() => {
            xml.write_event(Event::Empty(element))?;
        }
        Node::Literal(literal) => {
            xml.write_event(Event::Start(element))?;
            xml.write_event(Event::Text(BytesText::new(xml_value(literal.as_str())?)))?;
            xml.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        }
    }
    Ok(())
}
