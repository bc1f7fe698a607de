// Minimal XML tree for firmware status documents.
//
// The appliances ship several firmware generations with diverging markup:
// element case differs, some put a namespace prefix on every tag, some put
// data in attributes and some in child elements. Deserialization against a
// fixed schema would need one mapping per generation, so the parser builds a
// small owned tree instead and lets the dialect readers walk it. Namespace
// prefixes are dropped at parse time; name lookups ignore ASCII case.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;

use crate::error::Error;

/// One parsed XML element with its attributes, child elements, and text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    /// Parse a whole document into a tree rooted at a synthetic document
    /// node. A document the XML reader rejects, or one containing no
    /// element at all (empty body, plain text, declaration only), is an
    /// error; unexpected element content parses fine and simply matches
    /// no lookups.
    pub fn parse(xml: &str) -> Result<Self, Error> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack = vec![Self {
            name: "#document".to_string(),
            ..Self::default()
        }];

        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => stack.push(Self::from_start(&start)?),
                Ok(Event::Empty(start)) => {
                    let element = Self::from_start(&start)?;
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(element);
                    }
                }
                Ok(Event::End(_)) => {
                    // The reader checks tag balance; the synthetic root can
                    // still only be popped by a stray end tag, so guard it.
                    if stack.len() < 2 {
                        return Err(Error::Parse("unbalanced end tag".to_string()));
                    }
                    if let Some(element) = stack.pop() {
                        if let Some(parent) = stack.last_mut() {
                            parent.children.push(element);
                        }
                    }
                }
                Ok(Event::Text(text)) => {
                    let text = text.unescape().map_err(|e| Error::Parse(e.to_string()))?;
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text);
                    }
                }
                Ok(Event::CData(cdata)) => {
                    let bytes = cdata.into_inner();
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&bytes));
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {} // declarations, comments, processing instructions
                Err(e) => return Err(Error::Parse(e.to_string())),
            }
        }

        if stack.len() != 1 {
            return Err(Error::Parse("unclosed element at end of document".to_string()));
        }
        let document = stack
            .pop()
            .ok_or_else(|| Error::Parse("empty document".to_string()))?;
        if !document.has_child_elements() {
            return Err(Error::Parse("document has no root element".to_string()));
        }
        Ok(document)
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, Error> {
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| Error::Parse(e.to_string()))?;
            let value = attr
                .unescape_value()
                .map_err(|e| Error::Parse(e.to_string()))?
                .into_owned();
            attributes.push((local_name(attr.key), value));
        }
        Ok(Self {
            name: local_name(start.name()),
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    /// Element name with any namespace prefix removed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First direct child with the given name, ignoring case.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// All direct children with the given name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children
            .iter()
            .filter(move |c| c.name.eq_ignore_ascii_case(name))
    }

    /// Whether this element contains any child elements at all.
    pub fn has_child_elements(&self) -> bool {
        !self.children.is_empty()
    }

    /// First element with the given name anywhere below this one, in
    /// document order.
    pub fn descendant(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name.eq_ignore_ascii_case(name) {
                return Some(child);
            }
            if let Some(found) = child.descendant(name) {
                return Some(found);
            }
        }
        None
    }

    /// Every element with the given name below this one, in document order.
    pub fn descendants(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name.eq_ignore_ascii_case(name) {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    /// Attribute value by name, ignoring case.
    pub fn attr(&self, name: &str) -> Option<String> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }

    /// Whether this element carries any attributes.
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Trimmed text content, `None` when empty.
    pub fn text(&self) -> Option<&str> {
        let text = self.text.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Text of the first matching direct child.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name)
            .and_then(Element::text)
            .map(ToOwned::to_owned)
    }

    /// Text of the first matching descendant.
    pub fn descendant_text(&self, name: &str) -> Option<String> {
        self.descendant(name)
            .and_then(Element::text)
            .map(ToOwned::to_owned)
    }
}

fn local_name(name: QName<'_>) -> String {
    String::from_utf8_lossy(name.local_name().as_ref()).into_owned()
}
