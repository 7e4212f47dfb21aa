use std::process;

use crate::{CheckResult, Cycle, MetricPoint, Service, State};

/// Summary used when no service exists for the polled device.
const NOT_DISCOVERED: &str = "no service discovered";

/// A Report is the nagios view of one poll cycle: the service it ran for and the results the check
/// produced. If the service was not discovered it reports unknown, otherwise the worst state of
/// its results.
///
/// ```rust
/// # use mikrotik_traffic::{CheckResult, MetricPoint, Report, Service, State};
/// let report = Report::new(
///     Some(Service),
///     vec![CheckResult::new(State::Ok, "Total received: 0 B")
///         .with_metric(MetricPoint::new("mikrotik_traffic_totalRx", 0, None))],
/// );
/// assert_eq!(
///     &report.to_nagios_string(),
///     "Traffic OK: Total received: 0 B | mikrotik_traffic_totalRx=0"
/// );
/// ```
pub struct Report {
    service: Option<Service>,
    results: Vec<CheckResult>,
}

impl Report {
    pub fn new(service: Option<Service>, results: Vec<CheckResult>) -> Report {
        Report { service, results }
    }

    /// Returns a slice of the contained results.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Will determine a State by the given results.
    ///
    /// A report without results for a discovered service is OK.
    pub fn state(&self) -> State {
        if self.service.is_none() {
            return State::Unknown;
        }

        self.results
            .iter()
            .fold(State::Ok, |state, result| state.worst(result.state))
    }

    /// The text between state and perfdata.
    pub fn description(&self) -> String {
        if self.service.is_none() {
            return NOT_DISCOVERED.to_owned();
        }

        self.results
            .iter()
            // `|` starts the perfdata section
            .map(|r| format!("{}{}", r.summary.replace('|', "\u{2758}"), r.state.marker()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns a string which nagios understands to determine the service state.
    pub fn to_nagios_string(&self) -> String {
        let name = self.service.map_or(crate::SERVICE_NAME, |s| s.name());
        let mut s = format!("{} {}", name, self.state());

        let description = self.description();
        if !description.is_empty() {
            s.push_str(&format!(": {}", description));
        }

        let metrics: Vec<&MetricPoint> = self
            .results
            .iter()
            .filter_map(|r| r.metric.as_ref())
            .collect();
        if !metrics.is_empty() {
            s.push_str(" |");

            for metric in metrics {
                s.push_str(&format!(" {}", metric.to_perf_string()));
            }
        }

        s
    }

    /// Will return the exit code of the determined state via Self::state.
    pub fn exit_code(&self) -> i32 {
        self.state().exit_code()
    }

    /// Will print Self::to_nagios_string and exit with the exit code from Self::exit_code
    pub fn print_and_exit(&self) -> ! {
        println!("{}", self.to_nagios_string());
        process::exit(self.exit_code());
    }
}

impl From<Cycle> for Report {
    fn from(cycle: Cycle) -> Self {
        Report::new(cycle.service, cycle.results)
    }
}

/// The purpose of ToPerfString is only so one can define perfdata representations without using
/// the ToString trait so we don't interfere with that.
pub trait ToPerfString {
    fn to_perf_string(&self) -> String;
}

impl_to_perf_string_on_to_string!(u64);

impl<T> ToPerfString for Option<T>
where
    T: ToPerfString,
{
    fn to_perf_string(&self) -> String {
        match self {
            Some(ref s) => s.to_perf_string(),
            None => String::new(),
        }
    }
}

impl ToPerfString for MetricPoint {
    fn to_perf_string(&self) -> String {
        // `=` separates label and value
        let name = self.name.replace('=', "_");

        // quote `'`
        let name = name.replace('\'', "''");

        let name = if name.contains(' ') {
            format!("'{}'", name)
        } else {
            name
        };

        perf_string!(
            name,
            self.value,
            self.levels.map(|l| l.warning),
            self.levels.map(|l| l.critical)
        )
    }
}
