use std::num::ParseIntError;

use crate::{render, Levels, MetricName, Params, Section, State};

/// Namespace all metric points of this check are recorded under.
pub const METRIC_PREFIX: &str = "mikrotik_traffic_";

/// Summary emitted for a device that has no traffic table.
pub const NO_DATA_SUMMARY: &str = "No traffic monitor data available";

/// A value recorded for graphing, independent of the state it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricPoint {
    pub name: String,
    pub value: u64,
    pub levels: Option<Levels<u64>>,
}

impl MetricPoint {
    pub fn new(name: &str, value: u64, levels: Option<Levels<u64>>) -> Self {
        MetricPoint {
            name: name.to_owned(),
            value,
            levels,
        }
    }
}

/// The outcome of evaluating a single value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
    pub state: State,
    pub summary: String,
    pub metric: Option<MetricPoint>,
}

impl CheckResult {
    pub fn new(state: State, summary: &str) -> Self {
        CheckResult {
            state,
            summary: summary.to_owned(),
            metric: None,
        }
    }

    pub fn with_metric(mut self, metric: MetricPoint) -> Self {
        self.metric = Some(metric);
        self
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("invalid value {value:?} for {metric}: {source}")]
    InvalidValue {
        metric: MetricName,
        value: String,
        source: ParseIntError,
    },
}

/// Evaluates `value` against optional upper levels.
///
/// The summary is `<label>: <value>`, followed by the levels if one of them was exceeded. The
/// returned result always carries a metric point when `metric_name` is given.
///
/// ```rust
/// # use mikrotik_traffic::{check_levels, render, Levels, State};
/// let result = check_levels(
///     "Used",
///     2048,
///     Some(&Levels::new(1024, 4096)),
///     render::bytes,
///     Some("used"),
/// );
/// assert_eq!(result.state, State::Warning);
/// assert_eq!(result.summary, "Used: 2.00 KB (warn/crit at 1.00 KB/4.00 KB)");
/// assert_eq!(result.metric.unwrap().value, 2048);
/// ```
pub fn check_levels<F>(
    label: &str,
    value: u64,
    levels: Option<&Levels<u64>>,
    render_func: F,
    metric_name: Option<&str>,
) -> CheckResult
where
    F: Fn(u64) -> String,
{
    let state = levels.map_or(State::Ok, |l| l.evaluate(&value));

    let mut summary = format!("{}: {}", label, render_func(value));
    if let (State::Warning | State::Critical, Some(levels)) = (&state, levels) {
        summary.push_str(&format!(
            " (warn/crit at {}/{})",
            render_func(levels.warning),
            render_func(levels.critical)
        ));
    }

    let result = CheckResult::new(state, &summary);
    match metric_name {
        Some(name) => result.with_metric(MetricPoint::new(name, value, levels.copied())),
        None => result,
    }
}

/// Evaluates every traffic counter of a section.
///
/// Results come in the order of [`MetricName::ALL`]. An absent section yields a single warning
/// and nothing else. A counter that is not an unsigned integer fails the whole check and no
/// results are returned.
pub fn check(params: &Params, section: &Section) -> Result<Vec<CheckResult>, CheckError> {
    let counters = match section {
        Section::Absent => return Ok(vec![CheckResult::new(State::Warning, NO_DATA_SUMMARY)]),
        Section::Present(counters) => counters,
    };

    let mut results = Vec::with_capacity(MetricName::ALL.len());
    for metric in MetricName::ALL {
        let raw = counters.get(metric);
        let value = raw.trim().parse::<u64>().map_err(|source| {
            tracing::warn!(%metric, value = raw, "counter is not a number");
            CheckError::InvalidValue {
                metric,
                value: raw.to_owned(),
                source,
            }
        })?;

        let render_func = if metric.is_rate() {
            render::iobandwidth
        } else {
            render::bytes
        };
        let metric_name = format!("{}{}", METRIC_PREFIX, metric.key());

        let result = check_levels(
            metric.label(),
            value,
            params.levels(metric),
            render_func,
            Some(&metric_name),
        );
        tracing::debug!(%metric, value, state = %result.state, "evaluated counter");
        results.push(result);
    }

    Ok(results)
}
