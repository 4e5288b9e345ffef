//! The entry-point-discovery capability the validator consumes.
//!
//! Discovery itself (routing attributes, module walks) lives outside this
//! crate. The engine only asks a scanner for the set of host-managed
//! entry-point identities; their injected callable parameters come from the
//! [`TypeIntrospector`](crate::TypeIntrospector).

use crate::key::ServiceKey;

/// Capability returning all class-like identities that are host-managed
/// entry points (handler/controller types).
pub trait EntryPointScanner {
    /// Entry-point implementation identities, in discovery order.
    fn entry_points(&self) -> Vec<ServiceKey>;
}

/// List-backed [`EntryPointScanner`] for hosts that enumerate their entry
/// points by hand, and for tests.
///
/// # Examples
///
/// ```rust
/// use wirecheck::{EntryPointScanner, StaticScanner, key_of};
///
/// struct WeatherEndpoint;
///
/// let scanner = StaticScanner::new(vec![key_of::<WeatherEndpoint>()]);
/// assert_eq!(scanner.entry_points().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticScanner {
    entry_points: Vec<ServiceKey>,
}

impl StaticScanner {
    /// Wraps a fixed list of entry-point identities.
    pub fn new(entry_points: Vec<ServiceKey>) -> Self {
        Self { entry_points }
    }

    /// Appends another entry point.
    pub fn add(&mut self, entry_point: ServiceKey) -> &mut Self {
        self.entry_points.push(entry_point);
        self
    }
}

impl EntryPointScanner for StaticScanner {
    fn entry_points(&self) -> Vec<ServiceKey> {
        self.entry_points.clone()
    }
}
