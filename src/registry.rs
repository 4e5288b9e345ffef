//! Ordered registry of service registrations.

use crate::descriptors::RegistrationDescriptor;
use crate::key::ServiceKey;
use crate::lifetime::Lifetime;

/// Ordered collection of [`RegistrationDescriptor`]s.
///
/// The validator treats the registry as an immutable snapshot for the
/// duration of a run. Multiple registrations may share a service identity;
/// real containers pick the last one at resolution time, but the validator
/// deliberately checks every candidate so that problems in any of them
/// surface (an over-approximation, not last-wins).
///
/// # Examples
///
/// ```rust
/// use wirecheck::{Lifetime, ServiceKey, ServiceRegistry, key_of};
///
/// struct SystemClock;
/// struct WeatherService;
///
/// let mut registry = ServiceRegistry::new();
/// registry.add_singleton(ServiceKey::Trait("dyn app::Clock"), key_of::<SystemClock>());
/// registry.add_scoped(ServiceKey::Trait("dyn app::WeatherService"), key_of::<WeatherService>());
/// registry.add_singleton_instance(ServiceKey::Trait("dyn app::Config"));
///
/// assert_eq!(registry.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    descriptors: Vec<RegistrationDescriptor>,
}

impl ServiceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Appends a descriptor, preserving registration order.
    pub fn add(&mut self, descriptor: RegistrationDescriptor) -> &mut Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Registers a constructible implementation with Singleton lifetime.
    pub fn add_singleton(&mut self, service: ServiceKey, implementation: ServiceKey) -> &mut Self {
        self.add(RegistrationDescriptor::new(
            service,
            Some(implementation),
            Lifetime::Singleton,
        ))
    }

    /// Registers a constructible implementation with Scoped lifetime.
    pub fn add_scoped(&mut self, service: ServiceKey, implementation: ServiceKey) -> &mut Self {
        self.add(RegistrationDescriptor::new(
            service,
            Some(implementation),
            Lifetime::Scoped,
        ))
    }

    /// Registers a constructible implementation with Transient lifetime.
    pub fn add_transient(&mut self, service: ServiceKey, implementation: ServiceKey) -> &mut Self {
        self.add(RegistrationDescriptor::new(
            service,
            Some(implementation),
            Lifetime::Transient,
        ))
    }

    /// Registers a pre-built instance (always Singleton, as in real containers).
    pub fn add_singleton_instance(&mut self, service: ServiceKey) -> &mut Self {
        self.add(RegistrationDescriptor::with_instance(
            service,
            Lifetime::Singleton,
        ))
    }

    /// Registers a factory-backed service with the given lifetime.
    ///
    /// The validator trusts factories: it cannot see inside the closure, so
    /// the registration counts as resolved without a constructor walk.
    pub fn add_factory(&mut self, service: ServiceKey, lifetime: Lifetime) -> &mut Self {
        self.add(RegistrationDescriptor::with_instance(service, lifetime))
    }

    /// All descriptors in registration order.
    pub fn descriptors(&self) -> &[RegistrationDescriptor] {
        &self.descriptors
    }

    /// Iterator over descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegistrationDescriptor> {
        self.descriptors.iter()
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::key_of;

    struct SystemClock;

    #[test]
    fn registration_order_is_preserved() {
        let mut registry = ServiceRegistry::new();
        registry
            .add_transient(ServiceKey::Trait("dyn app::A"), key_of::<SystemClock>())
            .add_scoped(ServiceKey::Trait("dyn app::B"), key_of::<SystemClock>())
            .add_singleton_instance(ServiceKey::Trait("dyn app::C"));

        let names: Vec<String> = registry.iter().map(|d| d.service.display_name()).collect();
        assert_eq!(names, vec!["dyn app::A", "dyn app::B", "dyn app::C"]);
    }

    #[test]
    fn duplicate_service_identities_are_kept() {
        let mut registry = ServiceRegistry::new();
        let service = ServiceKey::Trait("dyn app::Logger");
        registry.add_singleton(service.clone(), key_of::<SystemClock>());
        registry.add_singleton(service.clone(), key_of::<String>());
        assert_eq!(registry.iter().filter(|d| d.service == service).count(), 2);
    }

    #[test]
    fn factory_registrations_have_no_implementation() {
        let mut registry = ServiceRegistry::new();
        registry.add_factory(ServiceKey::Trait("dyn app::Mailer"), Lifetime::Transient);
        let descriptor = &registry.descriptors()[0];
        assert!(descriptor.has_instance);
        assert!(descriptor.implementation.is_none());
        assert_eq!(descriptor.lifetime, Lifetime::Transient);
    }
}
