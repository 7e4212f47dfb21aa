use std::fmt::Display;

use crate::{Report, State};

/// Runs a check and turns its error, if any, into a state to exit with.
///
/// Without an `on_error` handler an error is reported as unknown: a cycle that failed says nothing
/// about the health of the device.
pub struct Runner<E> {
    on_error: Option<Box<dyn FnOnce(&E) -> State>>,
}

impl<E: Display> Runner<E> {
    pub fn new() -> Self {
        Self { on_error: None }
    }

    pub fn on_error(mut self, f: impl FnOnce(&E) -> State + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// This will run either the default error handling or the one specified by calling
    /// [Runner::on_error].
    pub fn safe_run(self, f: impl FnOnce() -> Result<Report, E>) -> RunnerResult<E> {
        match f() {
            Ok(report) => RunnerResult::Ok(report),
            Err(err) => {
                let state = self.on_error.map_or(State::Unknown, |f| f(&err));
                tracing::debug!(%err, %state, "check failed");

                RunnerResult::Err(state, err)
            }
        }
    }
}

impl<E: Display> Default for Runner<E> {
    fn default() -> Self {
        Self::new()
    }
}

pub enum RunnerResult<E> {
    Ok(Report),
    Err(State, E),
}

impl<E: Display> RunnerResult<E> {
    /// The line nagios gets to see.
    pub fn to_nagios_string(&self) -> String {
        match self {
            RunnerResult::Ok(report) => report.to_nagios_string(),
            RunnerResult::Err(state, err) => format!("{}: {}", state, err),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerResult::Ok(report) => report.exit_code(),
            RunnerResult::Err(state, _) => state.exit_code(),
        }
    }

    pub fn print_and_exit(self) -> ! {
        println!("{}", self.to_nagios_string());
        std::process::exit(self.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CheckError, Error, MetricName, Service};

    #[derive(Debug, thiserror::Error)]
    #[error("woops")]
    struct EmptyError;

    #[test]
    fn test_runner_ok() {
        let result = Runner::<EmptyError>::new()
            .on_error(|_| panic!("error handler called for a successful check"))
            .safe_run(|| Ok(Report::new(Some(Service), vec![])));

        assert!(matches!(result, RunnerResult::Ok(_)));
        assert_eq!(result.exit_code(), 0);
        assert_eq!(&result.to_nagios_string(), "Traffic OK");
    }

    #[test]
    fn test_runner_error_defaults_to_unknown() {
        let result = Runner::<EmptyError>::new().safe_run(|| Err(EmptyError {}));

        assert!(matches!(result, RunnerResult::Err(State::Unknown, _)));
        assert_eq!(result.exit_code(), 3);
        assert_eq!(&result.to_nagios_string(), "UNKNOWN: woops");
    }

    #[test]
    fn test_runner_error_handler() {
        let result = Runner::<EmptyError>::new()
            .on_error(|_| State::Critical)
            .safe_run(|| Err(EmptyError {}));

        assert!(matches!(result, RunnerResult::Err(State::Critical, _)));
        assert_eq!(result.exit_code(), 2);
    }

    #[test]
    fn test_runner_invalid_value() {
        let result = Runner::<Error>::new().safe_run(|| {
            let section = crate::Section::Present(crate::TrafficCounters {
                current_tx: "abc".to_owned(),
                current_rx: "1".to_owned(),
                total_tx: "1".to_owned(),
                total_rx: "1".to_owned(),
            });
            let results = crate::check(&crate::Params::default(), &section)?;
            Ok(Report::new(Some(Service), results))
        });

        assert!(matches!(
            result,
            RunnerResult::Err(
                State::Unknown,
                Error::Check(CheckError::InvalidValue {
                    metric: MetricName::CurrentTx,
                    ..
                })
            )
        ));
        assert_eq!(
            &result.to_nagios_string(),
            "UNKNOWN: invalid value \"abc\" for currentTx: invalid digit found in string"
        );
    }
}
