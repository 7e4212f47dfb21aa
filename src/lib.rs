//! Threshold checks for the wireless traffic counters of Mikrotik RouterOS devices.
//!
//! A poll cycle goes through three plain functions: [`parse`] turns the raw SNMP sample into a
//! [`Section`], [`discover`] decides whether the check applies, and [`check`] evaluates every
//! counter against the configured [`Params`]. [`run_cycle`] strings them together and
//! [`Report`] renders the outcome as a nagios/icinga plugin line.
//!
//! ```rust
//! # use mikrotik_traffic::{run_cycle, Levels, MetricName, Params, Report, State};
//! let sample = vec![
//!     vec![vec!["12000000".to_owned()]],
//!     vec![vec!["8000000".to_owned()]],
//!     vec![vec!["500000000000".to_owned()]],
//!     vec![vec!["300000000000".to_owned()]],
//! ];
//! let params = Params::new().with_levels(MetricName::CurrentTx, Levels::new(10_000_000, 20_000_000));
//!
//! let cycle = run_cycle(&params, Some("RouterOS RB951G-2HnD"), &sample).unwrap();
//! assert_eq!(cycle.results.len(), 4);
//! assert_eq!(Report::from(cycle).state(), State::Warning);
//! ```

use std::cmp::Ordering;
use std::fmt;

#[macro_use]
mod macros;

mod check;
mod cycle;
mod discovery;
mod levels;
mod params;
pub mod render;
mod report;
mod runner;
mod section;
pub mod snmp;

pub use crate::check::{check, check_levels, CheckError, CheckResult, MetricPoint, METRIC_PREFIX};
pub use crate::cycle::{run_cycle, Cycle, Error};
pub use crate::discovery::{discover, Service, SERVICE_NAME};
pub use crate::levels::Levels;
pub use crate::params::{ConfigError, Params};
pub use crate::report::{Report, ToPerfString};
pub use crate::runner::{Runner, RunnerResult};
pub use crate::section::{parse, MetricName, ParseError, Sample, Section, TrafficCounters};

/// Represents a service state from nagios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl State {
    /// Returns the corresponding nagios exit code to signal the service state of self.
    pub fn exit_code(&self) -> i32 {
        match self {
            State::Ok => 0,
            State::Warning => 1,
            State::Critical => 2,
            State::Unknown => 3,
        }
    }

    /// Marker appended to a summary so the offending part stands out.
    pub fn marker(&self) -> &'static str {
        match self {
            State::Ok => "",
            State::Warning => " (!)",
            State::Critical => " (!!)",
            State::Unknown => " (?)",
        }
    }

    /// The more severe of two states. Unknown ranks between warning and critical.
    pub fn worst(self, other: State) -> State {
        self.max(other)
    }

    fn severity(&self) -> u8 {
        match self {
            State::Ok => 0,
            State::Warning => 1,
            State::Unknown => 2,
            State::Critical => 3,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            State::Ok => "OK",
            State::Warning => "WARNING",
            State::Critical => "CRITICAL",
            State::Unknown => "UNKNOWN",
        })
    }
}

impl Ord for State {
    fn cmp(&self, other: &State) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &State) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
