//! What the transport has to fetch from a device for this check, and whether the device qualifies.

use crate::MetricName;

/// sysDescr.0
pub const SYS_DESCR_OID: &str = ".1.3.6.1.2.1.1.1.0";

/// Prefix a RouterOS device reports in its sysDescr.
pub const SYS_DESCR_PREFIX: &str = "RouterOS";

/// MIKROTIK-MIB::mtxrWlRtabTable
pub const TRAFFIC_TABLE_OID: &str = ".1.3.6.1.4.1.14988.1.1.1.2";

/// A single column of the registration table, fetched as its own metric family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fetch {
    pub metric: MetricName,
    pub base: &'static str,
    pub column: &'static str,
}

impl Fetch {
    /// The full dotted OID of the column.
    pub fn oid(&self) -> String {
        format!("{}.{}", self.base, self.column)
    }
}

/// The families of a sample, in the order [`crate::parse`] expects them.
pub const FETCH: [Fetch; 4] = [
    // mtxrWlRtabTxRate
    Fetch {
        metric: MetricName::CurrentTx,
        base: TRAFFIC_TABLE_OID,
        column: "1.8",
    },
    // mtxrWlRtabRxRate
    Fetch {
        metric: MetricName::CurrentRx,
        base: TRAFFIC_TABLE_OID,
        column: "1.9",
    },
    // mtxrWlRtabTxBytes
    Fetch {
        metric: MetricName::TotalTx,
        base: TRAFFIC_TABLE_OID,
        column: "1.4",
    },
    // mtxrWlRtabRxBytes
    Fetch {
        metric: MetricName::TotalRx,
        base: TRAFFIC_TABLE_OID,
        column: "1.5",
    },
];

/// Whether a device with the given sysDescr should get this check.
pub fn detect(sys_descr: &str) -> bool {
    sys_descr.starts_with(SYS_DESCR_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert!(detect("RouterOS RB951G-2HnD"));
        assert!(detect("RouterOS"));
        assert!(!detect("Linux host 5.10.0"));
        assert!(!detect("routeros lowercase"));
        assert!(!detect(""));
    }

    #[test]
    fn test_fetch_layout() {
        let metrics: Vec<MetricName> = FETCH.iter().map(|f| f.metric).collect();
        assert_eq!(metrics, MetricName::ALL.to_vec());

        assert_eq!(FETCH[0].oid(), ".1.3.6.1.4.1.14988.1.1.1.2.1.8");
        assert_eq!(FETCH[3].oid(), ".1.3.6.1.4.1.14988.1.1.1.2.1.5");
    }
}
