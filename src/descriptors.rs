//! Registration descriptors, the nodes of the dependency graph.

use crate::key::ServiceKey;
use crate::lifetime::Lifetime;

/// One entry of a service registry.
///
/// Maps a service identity to an implementation identity and a lifetime.
/// Registrations backed by a pre-built instance or a factory closure carry
/// `has_instance = true` and no implementation identity; the validator
/// considers those resolved without inspecting constructors, since there is
/// no constructible type to walk.
///
/// Equality and hashing cover the identity tuple (service, implementation,
/// lifetime) only, which is what deduplicates the validator's visited set.
///
/// # Examples
///
/// ```rust
/// use wirecheck::{Lifetime, RegistrationDescriptor, ServiceKey, key_of};
///
/// struct WeatherService;
///
/// let by_type = RegistrationDescriptor::new(
///     ServiceKey::Trait("dyn app::WeatherService"),
///     Some(key_of::<WeatherService>()),
///     Lifetime::Scoped,
/// );
/// assert!(!by_type.has_instance);
///
/// let by_factory = RegistrationDescriptor::with_instance(
///     ServiceKey::Trait("dyn app::Clock"),
///     Lifetime::Singleton,
/// );
/// assert!(by_factory.has_instance);
/// assert!(by_factory.implementation.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RegistrationDescriptor {
    /// The abstract identity consumers request
    pub service: ServiceKey,
    /// The concrete identity satisfying it, absent for instance/factory registrations
    pub implementation: Option<ServiceKey>,
    /// Instance sharing scope
    pub lifetime: Lifetime,
    /// True when backed by a ready instance or a factory closure
    pub has_instance: bool,
}

impl RegistrationDescriptor {
    /// Registration of a constructible implementation type.
    pub fn new(service: ServiceKey, implementation: Option<ServiceKey>, lifetime: Lifetime) -> Self {
        Self {
            service,
            implementation,
            lifetime,
            has_instance: false,
        }
    }

    /// Registration backed by a pre-built instance or factory closure.
    pub fn with_instance(service: ServiceKey, lifetime: Lifetime) -> Self {
        Self {
            service,
            implementation: None,
            lifetime,
            has_instance: true,
        }
    }
}

// Identity tuple only; has_instance does not participate so that a descriptor
// revisited through a different path still dedupes.
impl PartialEq for RegistrationDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.service == other.service
            && self.implementation == other.implementation
            && self.lifetime == other.lifetime
    }
}

impl Eq for RegistrationDescriptor {}

impl std::hash::Hash for RegistrationDescriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.service.hash(state);
        self.implementation.hash(state);
        self.lifetime.hash(state);
    }
}
