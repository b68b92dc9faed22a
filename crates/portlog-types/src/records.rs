use serde::{Deserialize, Serialize};

/// Identifier used to cluster records for listing queries (the "EOS id"
/// of a port call).
pub type EosId = u64;

/// A single event timestamp filed under a [`HashKey`](crate::HashKey).
///
/// Timestamp records are first-write-wins: once a key holds one, it is
/// never replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampRecord {
    /// Sub-stage of the port-call event this timestamp belongs to.
    pub event_sub_stage: u64,
    /// Port call this record is grouped under.
    pub eos_id: EosId,
    /// Unix milliseconds of the event.
    pub timestamp: u64,
}

/// Header metadata for one shipping transaction, filed under a
/// [`HashKey`](crate::HashKey).
///
/// Unlike [`TimestampRecord`], headers are overwritable in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxnHeader {
    pub eos_id: EosId,
    pub start_of_transaction: u64,
    pub end_of_transaction: u64,
    pub imo_number: u64,
    pub arrival_id: u64,
    pub total_throughput: u64,
    pub vessel_id: u64,
    /// Berth identifier, free-form.
    pub jetty: String,
    pub total_duration: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_record_serde_roundtrip() {
        let record = TimestampRecord {
            event_sub_stage: 3,
            eos_id: 1000,
            timestamp: 1_756_300_000_000,
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: TimestampRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn txn_header_serde_roundtrip() {
        let header = TxnHeader {
            eos_id: 1000,
            start_of_transaction: 1_756_300_000_000,
            end_of_transaction: 1_756_386_400_000,
            imo_number: 9_321_483,
            arrival_id: 42,
            total_throughput: 18_500,
            vessel_id: 77,
            jetty: "J-4".into(),
            total_duration: 86_400_000,
        };
        let json = serde_json::to_string(&header).unwrap();
        let parsed: TxnHeader = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, header);
    }
}
