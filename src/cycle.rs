use crate::{check, discover, parse, snmp, CheckError, CheckResult, ConfigError, Params, Sample};
use crate::{Section, Service};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Check(#[from] CheckError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Everything one poll produced: whether the service exists and, if it does, its results in
/// evaluation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    pub service: Option<Service>,
    pub results: Vec<CheckResult>,
}

/// Runs parse, discovery and check for a single poll.
///
/// `sys_descr` is the device's sysDescr if the transport fetched it; a device that is not running
/// RouterOS gets no service. A sample that cannot be parsed gets no service either. A counter that
/// is not a number fails the whole cycle.
pub fn run_cycle(params: &Params, sys_descr: Option<&str>, sample: &Sample) -> Result<Cycle, Error> {
    let section = match sys_descr {
        Some(descr) if !snmp::detect(descr) => {
            tracing::info!(sys_descr = descr, "device is not running RouterOS");
            None
        }
        _ => parse_or_skip(sample),
    };

    let service = discover(section.as_ref());
    let results = match (&service, &section) {
        (Some(_), Some(section)) => check(params, section)?,
        _ => Vec::new(),
    };

    Ok(Cycle { service, results })
}

fn parse_or_skip(sample: &Sample) -> Option<Section> {
    match parse(sample) {
        Ok(section) => Some(section),
        Err(err) => {
            tracing::warn!(%err, "unable to build a section from the sample");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Levels, MetricName, State};

    fn sample(values: &[&str]) -> Sample {
        values
            .iter()
            .map(|v| vec![vec![v.to_string()]])
            .collect()
    }

    #[test]
    fn test_run_cycle() {
        let params = params![MetricName::CurrentTx => (10_000_000, 20_000_000)];
        let sample = sample(&["12000000", "8000000", "500000000000", "300000000000"]);

        let cycle = run_cycle(&params, Some("RouterOS RB951G-2HnD"), &sample).unwrap();
        assert_eq!(cycle.service, Some(Service));

        let states: Vec<State> = cycle.results.iter().map(|r| r.state).collect();
        assert_eq!(states, vec![State::Warning, State::Ok, State::Ok, State::Ok]);

        let values: Vec<u64> = cycle
            .results
            .iter()
            .map(|r| r.metric.as_ref().unwrap().value)
            .collect();
        assert_eq!(values, vec![12_000_000, 8_000_000, 500_000_000_000, 300_000_000_000]);
        assert_eq!(
            cycle.results[0].metric.as_ref().unwrap().levels,
            Some(Levels::new(10_000_000, 20_000_000))
        );

        // nothing carries over between polls
        let again = run_cycle(&params, Some("RouterOS RB951G-2HnD"), &sample).unwrap();
        assert_eq!(cycle, again);
    }

    #[test]
    fn test_run_cycle_without_sys_descr() {
        let cycle = run_cycle(&Params::default(), None, &sample(&["1", "2", "3", "4"])).unwrap();
        assert_eq!(cycle.service, Some(Service));
        assert_eq!(cycle.results.len(), 4);
    }

    #[test]
    fn test_run_cycle_absent() {
        let empty: Sample = vec![vec![], vec![], vec![], vec![]];
        let cycle = run_cycle(&Params::default(), Some("RouterOS"), &empty).unwrap();

        assert_eq!(cycle.service, Some(Service));
        assert_eq!(cycle.results.len(), 1);
        assert_eq!(cycle.results[0].state, State::Warning);
        assert!(cycle.results.iter().all(|r| r.metric.is_none()));
    }

    #[test]
    fn test_run_cycle_not_detected() {
        let cycle = run_cycle(
            &Params::default(),
            Some("Linux host 5.10.0"),
            &sample(&["1", "2", "3", "4"]),
        )
        .unwrap();
        assert_eq!(cycle.service, None);
        assert!(cycle.results.is_empty());
    }

    #[test]
    fn test_run_cycle_unparsable_sample() {
        let cycle = run_cycle(&Params::default(), None, &sample(&["1", "2"])).unwrap();
        assert_eq!(cycle.service, None);
        assert!(cycle.results.is_empty());
    }

    #[test]
    fn test_run_cycle_invalid_value() {
        let result = run_cycle(&Params::default(), None, &sample(&["1", "x", "3", "4"]));
        assert!(matches!(
            result,
            Err(Error::Check(CheckError::InvalidValue {
                metric: MetricName::CurrentRx,
                ..
            }))
        ));
    }
}
