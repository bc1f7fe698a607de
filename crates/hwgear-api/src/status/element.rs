// Element dialect: CamelCase markup with data in child elements.
//
// Written by current Poseidon and HWg-SMS firmware. The identity lives in an
// `Agent` block; records live as `Entry` children of the `SenSet`,
// `BinaryInSet` and `OutputSet` groups. Some firmware qualifies every tag
// with a namespace prefix, which the tree already strips.

use crate::xml::Element;

use super::{RawAgent, RawEntry, RawStatus};

const SETS: [&str; 3] = ["SenSet", "BinaryInSet", "OutputSet"];

pub(super) fn matches(root: &Element) -> bool {
    SETS.iter().any(|set| root.descendant(set).is_some())
        || root
            .descendant("Agent")
            .is_some_and(Element::has_child_elements)
}

pub(super) fn read(root: &Element) -> RawStatus {
    let mut status = RawStatus::default();

    if let Some(agent) = root.descendant("Agent") {
        // Environmental units title themselves in `Title`; gateways carry a
        // `ProductName` instead. When `DeviceName` is absent a gateway's
        // product text doubles as the display name.
        let title = agent.child_text("Title");
        let product = agent.child_text("ProductName");
        let model = title.or_else(|| product.clone());
        let name = agent
            .child_text("DeviceName")
            .or_else(|| product.as_ref().and(model.clone()));

        status.agent = RawAgent {
            name,
            model,
            version: agent.child_text("Version"),
            serial: agent.child_text("SerialNumber"),
        };
    }

    if let Some(set) = root.descendant("SenSet") {
        status.sensors = read_entries(set);
    }
    if let Some(set) = root.descendant("BinaryInSet") {
        status.binary_inputs = read_entries(set);
    }
    if let Some(set) = root.descendant("OutputSet") {
        status.outputs = read_entries(set);
    }

    status
}

fn read_entries(set: &Element) -> Vec<RawEntry> {
    set.children("Entry").map(read_entry).collect()
}

fn read_entry(entry: &Element) -> RawEntry {
    RawEntry {
        id: entry.child_text("ID"),
        name: entry.child_text("Name"),
        // A present `Value` element with no text is still a value: open
        // binary inputs report exactly that shape, and the record must
        // survive to become an inactive input rather than vanish.
        value: entry
            .child("Value")
            .map(|value| value.text().unwrap_or_default().to_owned()),
        unit: entry.child_text("Units"),
        state: entry.child_text("State"),
    }
}
