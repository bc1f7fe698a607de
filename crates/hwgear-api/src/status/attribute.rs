// Attribute dialect: lowercase markup with identity in attributes.
//
// Written by older firmware. The `agent` element carries `name`, `model`,
// `version` and `serial` as attributes; `entry`, `input` and `output`
// records carry `id`, `name` and `unit` as attributes with only the
// volatile leaves (`value`, `state`, sometimes `unit`) as child elements.
// When a record has both a `unit` attribute and a `unit` child, the
// attribute wins.

use crate::xml::Element;

use super::{RawAgent, RawEntry, RawStatus};

const RECORDS: [&str; 3] = ["entry", "input", "output"];

pub(super) fn matches(root: &Element) -> bool {
    let record_with_id = RECORDS.iter().any(|record| {
        root.descendants(record)
            .iter()
            .any(|e| e.attr("id").is_some())
    });
    record_with_id
        || root
            .descendant("agent")
            .is_some_and(Element::has_attributes)
}

pub(super) fn read(root: &Element) -> RawStatus {
    let mut status = RawStatus::default();

    if let Some(agent) = root.descendant("agent") {
        status.agent = RawAgent {
            name: agent.attr("name"),
            model: agent.attr("model"),
            version: agent.attr("version"),
            serial: agent.attr("serial"),
        };
    }

    status.sensors = read_records(root, "entry");
    status.binary_inputs = read_records(root, "input");
    status.outputs = read_records(root, "output");
    status
}

fn read_records(root: &Element, name: &str) -> Vec<RawEntry> {
    root.descendants(name).into_iter().map(read_record).collect()
}

fn read_record(record: &Element) -> RawEntry {
    RawEntry {
        id: record.attr("id"),
        name: record.attr("name"),
        // Presence of the `value` element counts even when it has no text,
        // same as in the other dialect.
        value: record
            .child("value")
            .map(|value| value.text().unwrap_or_default().to_owned()),
        unit: record.attr("unit").or_else(|| record.child_text("unit")),
        state: record.child_text("state"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const LEGACY_DOC: &str = r#"<root>
  <agent model="Poseidon2 3266" version="1.0.4" serial="112233" name="Cellar unit"/>
  <entry id="101" name="Outdoor" unit="C">
    <value>7.25</value>
    <state>0</state>
  </entry>
  <entry id="102" name="Loft">
    <value>broken</value>
    <unit>C</unit>
  </entry>
  <input id="1" name="Water leak">
    <value>0</value>
  </input>
  <output id="2" name="Pump">
    <value>ON</value>
  </output>
</root>"#;

    fn parse(doc: &str) -> RawStatus {
        let root = Element::parse(doc).unwrap();
        assert!(matches(&root));
        read(&root)
    }

    #[test]
    fn reads_legacy_document() {
        let status = parse(LEGACY_DOC);

        assert_eq!(status.agent.name.as_deref(), Some("Cellar unit"));
        assert_eq!(status.agent.model.as_deref(), Some("Poseidon2 3266"));
        assert_eq!(status.agent.version.as_deref(), Some("1.0.4"));
        assert_eq!(status.agent.serial.as_deref(), Some("112233"));

        assert_eq!(status.sensors.len(), 2);
        let outdoor = &status.sensors[0];
        assert_eq!(outdoor.id.as_deref(), Some("101"));
        assert_eq!(outdoor.value.as_deref(), Some("7.25"));
        assert_eq!(outdoor.state.as_deref(), Some("0"));

        assert_eq!(status.binary_inputs.len(), 1);
        assert_eq!(status.binary_inputs[0].name.as_deref(), Some("Water leak"));
        assert_eq!(status.outputs.len(), 1);
        assert_eq!(status.outputs[0].value.as_deref(), Some("ON"));
    }

    #[test]
    fn unit_attribute_wins_over_unit_child() {
        let doc = r#"<root><entry id="7" unit="V"><value>12.1</value><unit>A</unit></entry></root>"#;
        let status = parse(doc);
        assert_eq!(status.sensors[0].unit.as_deref(), Some("V"));
    }

    #[test]
    fn unit_child_used_when_attribute_absent() {
        let status = parse(LEGACY_DOC);
        assert_eq!(status.sensors[1].unit.as_deref(), Some("C"));
    }

    #[test]
    fn present_but_empty_value_reads_as_empty_string() {
        let doc = r#"<root><input id="1" name="Door"><value/></input></root>"#;
        let status = parse(doc);
        assert_eq!(status.binary_inputs[0].value.as_deref(), Some(""));
    }

    #[test]
    fn agent_attributes_alone_satisfy_the_probe() {
        let root = Element::parse(r#"<root><agent model="STE2"/></root>"#).unwrap();
        assert!(matches(&root));
        let status = read(&root);
        assert_eq!(status.agent.model.as_deref(), Some("STE2"));
        assert!(status.sensors.is_empty());
    }

    #[test]
    fn records_without_id_attributes_do_not_match() {
        // CamelCase Entry elements carry no id attribute, so a stray lookup
        // in the wrong dialect cannot claim the document.
        let doc = r"<Root><SenSet><Entry><ID>215</ID></Entry></SenSet></Root>";
        let root = Element::parse(doc).unwrap();
        assert!(!matches(&root));
    }
}
