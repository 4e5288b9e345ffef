//! # wirecheck
//!
//! Static dependency-graph validation for DI service registries, inspired by
//! Microsoft.Extensions.DependencyInjection.
//!
//! Given a declarative list of service registrations, wirecheck determines —
//! without instantiating anything — whether every registered service's
//! dependency graph is resolvable and whether lifetime-capture rules hold
//! (no longer-lived service transitively depending on a shorter-lived one).
//! It also validates externally discovered "endpoint" consumers: handler
//! types whose constructors and per-call injected parameters must resolve.
//!
//! ## Features
//!
//! - **Full-registry walk**: every registration validated as a graph node,
//!   each expanded at most once (cycles terminate, wide graphs stay linear)
//! - **Lifetime-capture lattice**: Singleton/Scoped/Transient compatibility
//!   checks, surfaced as warnings with a configurable exemption list
//! - **Pluggable introspection**: constructor and callable metadata arrive
//!   through a capability trait; tables, codegen, or reflection all fit
//! - **Assertion API**: narrow expectations about a single service identity
//!   (existence, lifetime, implementation) without a full-graph walk
//! - **Findings, not faults**: every problem is a value in a deduplicated
//!   set, so callers always get the complete report
//!
//! ## Quick Start
//!
//! ```rust
//! use wirecheck::{DependencyValidator, Lifetime, ServiceKey, ServiceRegistry,
//!                 StaticIntrospector, key_of};
//!
//! struct SystemClock;
//! struct WeatherService;
//!
//! let clock = ServiceKey::Trait("dyn app::Clock");
//! let weather = ServiceKey::Trait("dyn app::WeatherService");
//!
//! // Describe the registry the host would build
//! let mut registry = ServiceRegistry::new();
//! registry.add_singleton(clock.clone(), key_of::<SystemClock>());
//! registry.add_scoped(weather.clone(), key_of::<WeatherService>());
//!
//! // Supply constructor metadata
//! let mut introspection = StaticIntrospector::new();
//! introspection.describe(key_of::<SystemClock>()).constructor(vec![]);
//! introspection.describe(key_of::<WeatherService>()).constructor(vec![clock]);
//!
//! // Walk the graph
//! let mut validator = DependencyValidator::new(&registry, &introspection);
//! validator.validate_all();
//! validator.assert_registered_with_lifetime(&weather, Lifetime::Scoped);
//!
//! assert!(validator.is_valid());
//! ```
//!
//! ## Validating endpoints
//!
//! ```rust
//! use wirecheck::{DependencyValidator, ServiceKey, ServiceRegistry, StaticIntrospector,
//!                 StaticScanner, key_of};
//!
//! struct WeatherEndpoint;
//! struct WeatherService;
//!
//! let service = ServiceKey::Trait("dyn app::WeatherService");
//!
//! let mut registry = ServiceRegistry::new();
//! registry.add_scoped(service.clone(), key_of::<WeatherService>());
//!
//! let mut introspection = StaticIntrospector::new();
//! introspection.describe(key_of::<WeatherService>()).constructor(vec![]);
//! introspection
//!     .describe(key_of::<WeatherEndpoint>())
//!     .constructor(vec![])
//!     .method("get", vec![service]); // injected at call time
//!
//! let scanner = StaticScanner::new(vec![key_of::<WeatherEndpoint>()]);
//!
//! let mut validator = DependencyValidator::new(&registry, &introspection);
//! validator.validate_entry_points(&scanner);
//! assert!(validator.is_valid());
//! ```
//!
//! ## What warnings mean
//!
//! Lifetime-capture violations and missing usable constructors are warnings:
//! real containers tolerate both (e.g. transient helpers injected into
//! singletons through factories the static walk cannot see). Only errors —
//! unresolvable dependencies, assertion mismatches, registrations with
//! neither implementation nor instance — make [`DependencyValidator::is_valid`]
//! return `false`.

// Module declarations
pub mod descriptors;
pub mod findings;
pub mod introspection;
pub mod key;
pub mod lifetime;
pub mod registry;
pub mod scanning;
pub mod validator;

#[cfg(feature = "json-report")]
pub mod report;

// Re-export core types
pub use descriptors::RegistrationDescriptor;
pub use findings::{render_report, Finding, Severity};
pub use introspection::{ConstructorInfo, MethodInfo, StaticIntrospector, TypeIntrospector, TypeMetadata};
pub use key::{key_of, ServiceKey};
pub use lifetime::Lifetime;
pub use registry::ServiceRegistry;
pub use scanning::{EntryPointScanner, StaticScanner};
pub use validator::DependencyValidator;

#[cfg(feature = "json-report")]
pub use report::{JsonFinding, JsonReport};
