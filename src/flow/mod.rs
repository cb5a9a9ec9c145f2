//! Flow record parsing.
//!
//! Log files mix flow records with unrelated JSON lines. A line is only
//! considered when it contains the `"flow":` marker; it is then deserialized
//! just far enough to pull out the source identity, destination identity and
//! TCP destination port. Everything else on the line is ignored here and
//! carried through untouched by the caller.
//!
//! Member names match regardless of ASCII case. Absent or `null` fields
//! count as zero, so a flow without a port still produces a key.

mod decode;
mod key;

use serde::de::{DeserializeSeed, MapAccess};

use crate::config::FLOW_MARKER;
use decode::{is_field, skip_value, Merge, MergeInt, MergeObject};

pub use key::FlowKey;

/// Why a line did not yield a flow key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Line does not contain the flow marker
    NotAFlow,
    /// Line contains the marker but is not a well-formed flow record
    Malformed,
}

/// Top level of a flow-bearing log line.
#[derive(Debug, Default)]
struct FlowLine {
    flow: FlowRecord,
}

/// The parts of a flow record that identify it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    source: Endpoint,
    destination: Endpoint,
    l4: Layer4,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Endpoint {
    identity: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Layer4 {
    tcp: Tcp,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Tcp {
    destination_port: i64,
}

impl MergeObject for FlowLine {
    const EXPECTING: &'static str = "a JSON object";

    fn merge_entry<'de, A: MapAccess<'de>>(
        &mut self,
        key: &str,
        map: &mut A,
    ) -> Result<(), A::Error> {
        if is_field(key, "flow") {
            map.next_value_seed(Merge(&mut self.flow))
        } else {
            skip_value(map)
        }
    }
}

impl MergeObject for FlowRecord {
    const EXPECTING: &'static str = "a flow object";

    fn merge_entry<'de, A: MapAccess<'de>>(
        &mut self,
        key: &str,
        map: &mut A,
    ) -> Result<(), A::Error> {
        if is_field(key, "source") {
            map.next_value_seed(Merge(&mut self.source))
        } else if is_field(key, "destination") {
            map.next_value_seed(Merge(&mut self.destination))
        } else if is_field(key, "l4") {
            map.next_value_seed(Merge(&mut self.l4))
        } else {
            skip_value(map)
        }
    }
}

impl MergeObject for Endpoint {
    const EXPECTING: &'static str = "an endpoint object";

    fn merge_entry<'de, A: MapAccess<'de>>(
        &mut self,
        key: &str,
        map: &mut A,
    ) -> Result<(), A::Error> {
        if is_field(key, "identity") {
            map.next_value_seed(MergeInt(&mut self.identity))
        } else {
            skip_value(map)
        }
    }
}

impl MergeObject for Layer4 {
    const EXPECTING: &'static str = "an l4 object";

    fn merge_entry<'de, A: MapAccess<'de>>(
        &mut self,
        key: &str,
        map: &mut A,
    ) -> Result<(), A::Error> {
        if is_field(key, "TCP") {
            map.next_value_seed(Merge(&mut self.tcp))
        } else {
            skip_value(map)
        }
    }
}

impl MergeObject for Tcp {
    const EXPECTING: &'static str = "a TCP object";

    fn merge_entry<'de, A: MapAccess<'de>>(
        &mut self,
        key: &str,
        map: &mut A,
    ) -> Result<(), A::Error> {
        if is_field(key, "destination_port") {
            map.next_value_seed(MergeInt(&mut self.destination_port))
        } else {
            skip_value(map)
        }
    }
}

impl FlowRecord {
    pub fn source_identity(&self) -> i64 {
        self.source.identity
    }

    pub fn destination_identity(&self) -> i64 {
        self.destination.identity
    }

    pub fn destination_port(&self) -> i64 {
        self.l4.tcp.destination_port
    }

    pub fn key(&self) -> FlowKey {
        FlowKey::new(
            self.source_identity(),
            self.destination_identity(),
            self.destination_port(),
        )
    }

    /// Decode the `flow` member of a JSON line.
    ///
    /// A line without a `flow` member decodes to an all-zero record.
    pub fn from_json(line: &str) -> Result<Self, serde_json::Error> {
        let mut parsed = FlowLine::default();
        let mut deserializer = serde_json::Deserializer::from_str(line);
        Merge(&mut parsed).deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(parsed.flow)
    }
}

/// Whether `line` carries the marker that makes it worth parsing.
pub fn has_marker(line: &str, marker: &str) -> bool {
    line.contains(marker)
}

/// Derive the dedup key of `line`, using the standard `"flow":` marker.
pub fn parse_line(line: &str) -> Result<FlowKey, Rejection> {
    parse_line_with_marker(line, FLOW_MARKER)
}

/// Derive the dedup key of `line`, pre-filtering on `marker`.
pub fn parse_line_with_marker(line: &str, marker: &str) -> Result<FlowKey, Rejection> {
    if !has_marker(line, marker) {
        return Err(Rejection::NotAFlow);
    }

    FlowRecord::from_json(line)
        .map(|record| record.key())
        .map_err(|_| Rejection::Malformed)
}
