//! Deduplication key for flow records.

use std::fmt;

/// Identity of a logical flow: who talked to whom, on which port.
///
/// Ordering is lexicographic over `(source, destination, port)`, which is
/// the order unique flows are written out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FlowKey {
    pub source_identity: i64,
    pub destination_identity: i64,
    pub destination_port: i64,
}

impl FlowKey {
    pub fn new(source_identity: i64, destination_identity: i64, destination_port: i64) -> Self {
        Self {
            source_identity,
            destination_identity,
            destination_port,
        }
    }
}

impl fmt::Display for FlowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.source_identity, self.destination_identity, self.destination_port
        )
    }
}
