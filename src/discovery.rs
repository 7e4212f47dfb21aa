use crate::Section;

/// Service description the check runs under.
pub const SERVICE_NAME: &str = "Traffic";

/// Marker that the traffic check applies to a polled device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Service;

impl Service {
    pub fn name(&self) -> &'static str {
        SERVICE_NAME
    }
}

/// Yields a service for every section that could be built, including [`Section::Absent`].
///
/// `None` stands for a device that was not detected or whose sample could not be parsed.
///
/// ```rust
/// # use mikrotik_traffic::{discover, Section, Service};
/// assert_eq!(discover(Some(&Section::Absent)), Some(Service));
/// assert_eq!(discover(None), None);
/// ```
pub fn discover(section: Option<&Section>) -> Option<Service> {
    section.map(|_| Service)
}
