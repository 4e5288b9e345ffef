//! The validation engine: a memoized walk over the registration graph.

use std::collections::HashSet;

use crate::descriptors::RegistrationDescriptor;
use crate::findings::{render_report, Finding, Severity};
use crate::introspection::{ConstructorInfo, TypeIntrospector};
use crate::key::ServiceKey;
use crate::lifetime::Lifetime;
use crate::registry::ServiceRegistry;
use crate::scanning::EntryPointScanner;

/// Static validator for a service registry.
///
/// Walks every registration's dependency graph without instantiating
/// anything, collecting a deduplicated set of [`Finding`]s. A visited set
/// guarantees each distinct registration is expanded at most once per run,
/// which both terminates cyclic graphs and bounds the walk to
/// O(registrations x constructor arity) instead of exponential in depth.
///
/// Validators are one-shot: build a fresh one per run and do not share it
/// across threads. The registry is snapshotted at construction.
///
/// # Examples
///
/// ```rust
/// use wirecheck::{DependencyValidator, ServiceKey, ServiceRegistry,
///                 StaticIntrospector, key_of};
///
/// struct ConsoleLogger;
/// struct ReportGenerator;
///
/// let logger = ServiceKey::Trait("dyn app::Logger");
///
/// let mut registry = ServiceRegistry::new();
/// registry.add_singleton(logger.clone(), key_of::<ConsoleLogger>());
///
/// let mut introspection = StaticIntrospector::new();
/// introspection.describe(key_of::<ConsoleLogger>()).constructor(vec![]);
/// introspection.describe(key_of::<ReportGenerator>()).constructor(vec![logger]);
///
/// let mut validator = DependencyValidator::new(&registry, &introspection);
/// validator.validate_all();
/// validator.validate_consumer_type(key_of::<ReportGenerator>());
///
/// assert!(validator.is_valid());
/// assert!(validator.findings().is_empty());
/// ```
pub struct DependencyValidator<'a> {
    services: Vec<RegistrationDescriptor>,
    introspector: &'a dyn TypeIntrospector,
    findings: HashSet<Finding>,
    visited: HashSet<RegistrationDescriptor>,
    lifetime_check_exempt: Vec<ServiceKey>,
    entry_point_lifetime: Lifetime,
}

impl<'a> DependencyValidator<'a> {
    /// Creates a validator over a snapshot of the registry.
    pub fn new(registry: &ServiceRegistry, introspector: &'a dyn TypeIntrospector) -> Self {
        Self {
            services: registry.descriptors().to_vec(),
            introspector,
            findings: HashSet::new(),
            visited: HashSet::new(),
            lifetime_check_exempt: Vec::new(),
            entry_point_lifetime: Lifetime::Transient,
        }
    }

    /// Exempts a service identity from lifetime-capture checking.
    ///
    /// Frameworks register a handful of internals as Transient yet inject
    /// them into Singletons through factories the static walk cannot see;
    /// hosts allowlist those identities here.
    pub fn exempt_from_lifetime_check(&mut self, service: ServiceKey) -> &mut Self {
        self.lifetime_check_exempt.push(service);
        self
    }

    /// Overrides the lifetime entry-point consumers are validated with.
    /// Hosts create handler types per request, hence the Transient default.
    pub fn set_entry_point_lifetime(&mut self, lifetime: Lifetime) -> &mut Self {
        self.entry_point_lifetime = lifetime;
        self
    }

    /// Validates every registration in the registry exactly once.
    pub fn validate_all(&mut self) {
        for index in 0..self.services.len() {
            let descriptor = self.services[index].clone();
            self.validate_node(&descriptor);
        }
    }

    /// Validates an implementation identity as a synthetic Transient
    /// consumer. The identity does not need to appear in the registry.
    pub fn validate_consumer_type(&mut self, implementation: ServiceKey) {
        let descriptor = RegistrationDescriptor::new(
            implementation.clone(),
            Some(implementation),
            Lifetime::Transient,
        );
        self.validate_node(&descriptor);
    }

    /// Resolves each parameter against the registry as if injected into a
    /// consumer of `caller` lifetime.
    pub fn validate_call_site_parameters(&mut self, parameters: &[ServiceKey], caller: Lifetime) {
        for parameter in parameters {
            self.resolve_dependency(parameter, caller, None, None);
        }
    }

    /// Validates every entry point the scanner reports: its constructor as a
    /// consumer node, then the injected parameters of each of its callables.
    pub fn validate_entry_points(&mut self, scanner: &dyn EntryPointScanner) {
        let lifetime = self.entry_point_lifetime;
        for entry_point in scanner.entry_points() {
            let descriptor = RegistrationDescriptor::new(
                entry_point.clone(),
                Some(entry_point.clone()),
                lifetime,
            );
            self.validate_node(&descriptor);

            let methods = self.introspector.methods(&entry_point);
            for method in methods {
                self.validate_call_site_parameters(&method.injected_parameters, lifetime);
            }
        }
    }

    /// Asserts that `service` is registered, with any implementation and
    /// lifetime.
    pub fn assert_registered(&mut self, service: &ServiceKey) {
        self.assert_with(service, None, None);
    }

    /// Asserts that `service` is registered with the given lifetime,
    /// regardless of implementation.
    pub fn assert_registered_with_lifetime(&mut self, service: &ServiceKey, lifetime: Lifetime) {
        self.assert_with(service, None, Some(lifetime));
    }

    /// Asserts that some registration of `service` uses the given
    /// implementation, even if others are registered too.
    pub fn assert_registered_with_implementation(
        &mut self,
        service: &ServiceKey,
        implementation: &ServiceKey,
    ) {
        self.assert_with(service, Some(implementation), None);
    }

    /// Asserts implementation and lifetime of a `service` registration.
    pub fn assert_registration(
        &mut self,
        service: &ServiceKey,
        implementation: &ServiceKey,
        lifetime: Lifetime,
    ) {
        self.assert_with(service, Some(implementation), Some(lifetime));
    }

    /// Overall validity: warnings are tolerated, errors are not.
    pub fn is_valid(&self) -> bool {
        self.findings.iter().all(|f| f.severity != Severity::Error)
    }

    /// The accumulated finding set.
    pub fn findings(&self) -> &HashSet<Finding> {
        &self.findings
    }

    /// Findings rendered as a report string, errors first.
    pub fn render_report(&self) -> String {
        render_report(&self.findings)
    }

    // Assertions purge the visited records for the asserted identity first,
    // so repeated assertions with different expectations are re-evaluated
    // instead of short-circuited by the global visited set.
    fn assert_with(
        &mut self,
        service: &ServiceKey,
        implementation: Option<&ServiceKey>,
        lifetime: Option<Lifetime>,
    ) {
        self.visited.retain(|d| d.service != *service);
        self.resolve_dependency(service, Lifetime::Transient, implementation, lifetime);
    }

    fn validate_node(&mut self, descriptor: &RegistrationDescriptor) {
        if self.visited.contains(descriptor) {
            return;
        }
        self.visited.insert(descriptor.clone());

        let Some(implementation) = descriptor.implementation.clone() else {
            // Instance and factory registrations count as resolved, even
            // though a factory might still fail at runtime.
            if descriptor.has_instance {
                return;
            }
            self.findings.insert(Finding::error(
                descriptor.service.clone(),
                "service is registered but does not have an implementation of any kind",
            ));
            return;
        };

        let constructors = self.introspector.constructors(&implementation);
        let Some(constructor) = select_constructor(&constructors) else {
            self.findings.insert(Finding::warning(
                descriptor.service.clone(),
                format!(
                    "implementation {} does not have any usable constructors",
                    implementation.display_name()
                ),
            ));
            return;
        };

        let parameters = constructor.parameters.clone();
        for parameter in &parameters {
            self.resolve_dependency(parameter, descriptor.lifetime, None, None);
        }
    }

    fn resolve_dependency(
        &mut self,
        requested: &ServiceKey,
        parent: Lifetime,
        required_implementation: Option<&ServiceKey>,
        required_lifetime: Option<Lifetime>,
    ) {
        // Containers universally supply their own resolver.
        if *requested == ServiceKey::Provider {
            return;
        }

        let definition = requested.generic_definition();
        let matches: Vec<RegistrationDescriptor> = self
            .services
            .iter()
            .filter(|d| {
                d.service == *requested
                    || definition.as_ref().is_some_and(|def| d.service == *def)
            })
            .cloned()
            .collect();

        if matches.is_empty() {
            // Sequence dependencies resolve to an empty collection.
            if matches!(requested, ServiceKey::Sequence(_)) {
                return;
            }
            self.findings.insert(Finding::error(
                requested.clone(),
                format!("failed to resolve {}", requested.display_name()),
            ));
            return;
        }

        if let Some(required) = required_implementation {
            if !matches
                .iter()
                .any(|d| d.implementation.as_ref() == Some(required))
            {
                self.findings.insert(Finding::error(
                    requested.clone(),
                    format!(
                        "{} does not match the required implementation {}",
                        requested.display_name(),
                        required.display_name()
                    ),
                ));
            }
        }

        // Every candidate is checked, not just the one a container would
        // pick; see the registry docs on over-approximation.
        for entry in &matches {
            self.check_lifetime_capture(&entry.service, parent, entry.lifetime);
            self.validate_node(entry);

            if let Some(required) = required_lifetime {
                if entry.lifetime != required {
                    self.findings.insert(Finding::error(
                        requested.clone(),
                        format!(
                            "service is implemented with the {} lifetime, but is required to have the {} lifetime",
                            entry.lifetime, required
                        ),
                    ));
                }
            }
        }
    }

    fn check_lifetime_capture(&mut self, service: &ServiceKey, parent: Lifetime, child: Lifetime) {
        if self.lifetime_check_exempt.contains(service) {
            return;
        }
        if !parent.can_depend_on(child) {
            self.findings.insert(Finding::warning(
                service.clone(),
                format!(
                    "service is implemented with the {} lifetime, but the parent has the {} lifetime",
                    child, parent
                ),
            ));
        }
    }
}

// The sole designated constructor wins when exactly one is flagged; otherwise
// fall back to the first declared. A documented heuristic, not a model of the
// container's actual overload selection.
fn select_constructor(constructors: &[ConstructorInfo]) -> Option<&ConstructorInfo> {
    let mut designated = constructors.iter().filter(|c| c.designated);
    match (designated.next(), designated.next()) {
        (Some(only), None) => Some(only),
        _ => constructors.first(),
    }
}
