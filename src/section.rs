use std::fmt;

/// One raw poll result: a list of metric families, each a list of rows, each row a list of cells.
///
/// The families appear in the order of [`MetricName::ALL`].
pub type Sample = Vec<Vec<Vec<String>>>;

/// The traffic counters a section carries, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricName {
    CurrentTx,
    CurrentRx,
    TotalTx,
    TotalRx,
}

impl MetricName {
    pub const ALL: [MetricName; 4] = [
        MetricName::CurrentTx,
        MetricName::CurrentRx,
        MetricName::TotalTx,
        MetricName::TotalRx,
    ];

    /// The key used in configuration and as suffix of the metric point name.
    pub fn key(&self) -> &'static str {
        match self {
            MetricName::CurrentTx => "currentTx",
            MetricName::CurrentRx => "currentRx",
            MetricName::TotalTx => "totalTx",
            MetricName::TotalRx => "totalRx",
        }
    }

    /// Human readable label used at the start of a result summary.
    pub fn label(&self) -> &'static str {
        match self {
            MetricName::CurrentTx => "Current TX rate",
            MetricName::CurrentRx => "Current RX rate",
            MetricName::TotalTx => "Total transmited",
            MetricName::TotalRx => "Total received",
        }
    }

    /// Rates are bandwidths, totals are plain byte counts.
    pub fn is_rate(&self) -> bool {
        matches!(self, MetricName::CurrentTx | MetricName::CurrentRx)
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw counter values of one poll, not yet converted to numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrafficCounters {
    pub current_tx: String,
    pub current_rx: String,
    pub total_tx: String,
    pub total_rx: String,
}

impl TrafficCounters {
    pub fn get(&self, metric: MetricName) -> &str {
        match metric {
            MetricName::CurrentTx => &self.current_tx,
            MetricName::CurrentRx => &self.current_rx,
            MetricName::TotalTx => &self.total_tx,
            MetricName::TotalRx => &self.total_rx,
        }
    }
}

/// The parsed form of a [`Sample`].
///
/// `Absent` means the device returned no rows for the traffic table, which still
/// counts as a discovered (but degraded) check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Absent,
    Present(TrafficCounters),
}

impl Section {
    pub fn is_absent(&self) -> bool {
        matches!(self, Section::Absent)
    }

    /// The raw value for a metric, `None` for an absent section.
    pub fn get(&self, metric: MetricName) -> Option<&str> {
        match self {
            Section::Absent => None,
            Section::Present(counters) => Some(counters.get(metric)),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no value returned for {metric}")]
    MissingValue { metric: MetricName },
}

/// Turns a raw sample into a [`Section`].
///
/// ```rust
/// # use mikrotik_traffic::{parse, Section};
/// let sample = vec![vec![], vec![], vec![], vec![]];
/// assert_eq!(parse(&sample), Ok(Section::Absent));
/// ```
pub fn parse(sample: &Sample) -> Result<Section, ParseError> {
    let first_is_empty = sample.first().map_or(true, |family| family.is_empty());
    if first_is_empty {
        tracing::debug!("traffic table returned no rows, section is absent");
        return Ok(Section::Absent);
    }

    let cell = |index: usize| -> Result<String, ParseError> {
        sample
            .get(index)
            .and_then(|family| family.first())
            .and_then(|row| row.first())
            .cloned()
            .ok_or(ParseError::MissingValue {
                metric: MetricName::ALL[index],
            })
    };

    Ok(Section::Present(TrafficCounters {
        current_tx: cell(0)?,
        current_rx: cell(1)?,
        total_tx: cell(2)?,
        total_rx: cell(3)?,
    }))
}
