//! Compiles a validated mapping into a template MCF document.
//!
//! The document is a sequence of node templates. Observation nodes carry the
//! statistical properties and reference CSV columns; a standalone place node
//! is emitted only when the place is identified by a free-text name, since an
//! identifier column (ISO code, FIPS code, ...) can be referenced directly.
//! Callers must run [`crate::validate::check_mapping`] first; an invalid
//! mapping yields a structurally incomplete document rather than an error.

use std::collections::HashMap;

use crate::mapping::{MappedThing, Mapping, MappingVal};
use crate::table::Column;

const TABLE: &str = "CSVTable";
const OBSERVATION_TYPE: &str = "StatVarObservation";

fn entity_ref(index: usize) -> String {
    format!("E:{TABLE}->E{index}")
}

fn column_ref(column: &Column) -> String {
    format!("C:{TABLE}->{}", column.id)
}

fn observation_property(thing: MappedThing) -> &'static str {
    match thing {
        MappedThing::Place => "observationAbout",
        MappedThing::StatVar => "variableMeasured",
        MappedThing::Date => "observationDate",
        MappedThing::Unit => "unit",
        MappedThing::Value => "value",
    }
}

/// Dates are plain strings in the graph; everything else constant-valued
/// (places, variables, units) is a node reference.
fn constant_value(thing: MappedThing, value: &str) -> String {
    match thing {
        MappedThing::Date => format!("\"{value}\""),
        _ => format!("dcid:{value}"),
    }
}

/// Node templates in allocation order, split by kind so place nodes can be
/// emitted ahead of the observation nodes that reference them.
#[derive(Default)]
struct NodeArena {
    place_nodes: Vec<String>,
    observation_nodes: Vec<String>,
    next_index: usize,
}

impl NodeArena {
    fn allocate(&mut self) -> usize {
        let index = self.next_index;
        self.next_index += 1;
        index
    }

    fn push_place(&mut self, index: usize, lines: &[String]) {
        self.place_nodes
            .push(format!("Node: {}\n{}", entity_ref(index), lines.join("\n")));
    }

    fn push_observation(&mut self, index: usize, lines: &[String]) {
        self.observation_nodes.push(format!(
            "Node: {}\ntypeOf: dcid:{OBSERVATION_TYPE}\n{}",
            entity_ref(index),
            lines.join("\n")
        ));
    }

    fn into_document(self) -> String {
        let blocks: Vec<String> = self
            .place_nodes
            .into_iter()
            .chain(self.observation_nodes)
            .collect();
        let mut doc = blocks.join("\n\n");
        doc.push('\n');
        doc
    }
}

/// Generates the template document for a mapping that has already passed
/// validation.
pub fn generate_tmcf(mapping: &Mapping) -> String {
    let mut arena = NodeArena::default();

    // Constants keyed by column index are injected into the one observation
    // node whose value comes from that column.
    let mut column_constants: HashMap<usize, Vec<String>> = HashMap::new();
    for (thing, val) in mapping.iter() {
        if let MappingVal::ColumnConstant { column_constants: constants } = val {
            for (&column_idx, constant) in constants {
                column_constants.entry(column_idx).or_default().push(format!(
                    "{}: {}",
                    observation_property(thing),
                    constant_value(thing, constant)
                ));
            }
        }
    }

    // Property lines shared by every observation node.
    let mut common_lines: Vec<String> = Vec::new();
    for (thing, val) in mapping.iter() {
        match val {
            MappingVal::FileConstant { file_constant } => {
                common_lines.push(format!(
                    "{}: {}",
                    observation_property(thing),
                    constant_value(thing, file_constant)
                ));
            }
            MappingVal::Column {
                column,
                place_type,
                place_property,
            } if thing != MappedThing::Value => {
                if thing == MappedThing::Place
                    && let (Some(place_type), Some(property)) = (place_type, place_property)
                    && !property.is_identifier()
                {
                    let index = arena.allocate();
                    arena.push_place(
                        index,
                        &[
                            format!("typeOf: dcid:{}", place_type.dcid()),
                            format!("{}: {}", property.dcid(), column_ref(column)),
                        ],
                    );
                    common_lines.push(format!("observationAbout: {}", entity_ref(index)));
                } else {
                    common_lines.push(format!(
                        "{}: {}",
                        observation_property(thing),
                        column_ref(column)
                    ));
                }
            }
            _ => {}
        }
    }

    let header_things = mapping.column_header_things();
    if let Some((thing, headers)) = header_things.first() {
        let place_node_info = match mapping.get(*thing) {
            Some(MappingVal::ColumnHeader {
                place_type: Some(place_type),
                place_property: Some(property),
                ..
            }) if *thing == MappedThing::Place && !property.is_identifier() => {
                Some((*place_type, *property))
            }
            _ => None,
        };
        for header in *headers {
            let mut lines = Vec::new();
            if let Some((place_type, property)) = place_node_info {
                let index = arena.allocate();
                arena.push_place(
                    index,
                    &[
                        format!("typeOf: dcid:{}", place_type.dcid()),
                        format!("{}: \"{}\"", property.dcid(), header.header),
                    ],
                );
                lines.push(format!("observationAbout: {}", entity_ref(index)));
            } else {
                lines.push(format!(
                    "{}: {}",
                    observation_property(*thing),
                    constant_value(*thing, &header.header)
                ));
            }
            lines.extend(common_lines.iter().cloned());
            lines.push(format!("value: {}", column_ref(header)));
            if let Some(extra) = column_constants.get(&header.column_idx) {
                lines.extend(extra.iter().cloned());
            }
            let index = arena.allocate();
            arena.push_observation(index, &lines);
        }
    } else {
        let mut lines = common_lines;
        if let Some(MappingVal::Column { column, .. }) = mapping.get(MappedThing::Value) {
            lines.push(format!("value: {}", column_ref(column)));
            if let Some(extra) = column_constants.get(&column.column_idx) {
                lines.extend(extra.iter().cloned());
            }
        }
        let index = arena.allocate();
        arena.push_observation(index, &lines);
    }

    arena.into_document()
}
