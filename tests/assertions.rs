//! Assertion API: narrow expectations about one service identity, evaluated
//! independently of the full-graph walk.

use wirecheck::{
    key_of, DependencyValidator, Lifetime, ServiceKey, ServiceRegistry, Severity,
    StaticIntrospector,
};

struct ConsoleLoggerProvider;
struct DebugLoggerProvider;
struct WeatherService;

fn logger_provider() -> ServiceKey {
    ServiceKey::Trait("dyn app::LoggerProvider")
}

fn weather() -> ServiceKey {
    ServiceKey::Trait("dyn app::WeatherService")
}

fn setup() -> (ServiceRegistry, StaticIntrospector) {
    let mut registry = ServiceRegistry::new();
    registry.add_singleton(logger_provider(), key_of::<ConsoleLoggerProvider>());
    registry.add_singleton(logger_provider(), key_of::<DebugLoggerProvider>());
    registry.add_scoped(weather(), key_of::<WeatherService>());

    let mut introspection = StaticIntrospector::new();
    introspection
        .describe(key_of::<ConsoleLoggerProvider>())
        .constructor(vec![]);
    introspection
        .describe(key_of::<DebugLoggerProvider>())
        .constructor(vec![]);
    introspection
        .describe(key_of::<WeatherService>())
        .constructor(vec![]);

    (registry, introspection)
}

#[test]
fn assert_registered_on_empty_registry_fails() {
    let registry = ServiceRegistry::new();
    let introspection = StaticIntrospector::new();
    let mut validator = DependencyValidator::new(&registry, &introspection);

    validator.assert_registered(&weather());

    assert!(!validator.is_valid());
    let finding = validator.findings().iter().next().unwrap();
    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(finding.message, "failed to resolve dyn app::WeatherService");
}

#[test]
fn assert_registered_succeeds_regardless_of_details() {
    let (registry, introspection) = setup();
    let mut validator = DependencyValidator::new(&registry, &introspection);

    validator.assert_registered(&weather());

    assert!(validator.is_valid());
    assert!(validator.findings().is_empty());
}

#[test]
fn assert_lifetime_mismatch_names_both_lifetimes() {
    let (registry, introspection) = setup();
    let mut validator = DependencyValidator::new(&registry, &introspection);

    validator.assert_registered_with_lifetime(&weather(), Lifetime::Singleton);

    assert!(!validator.is_valid());
    let finding = validator
        .findings()
        .iter()
        .find(|f| f.severity == Severity::Error)
        .unwrap();
    assert!(finding.message.contains("Scoped"));
    assert!(finding.message.contains("Singleton"));
}

#[test]
fn assert_implementation_matches_any_candidate() {
    let (registry, introspection) = setup();
    let mut validator = DependencyValidator::new(&registry, &introspection);

    // Both providers are registered; asserting either succeeds
    validator.assert_registered_with_implementation(&logger_provider(), &key_of::<ConsoleLoggerProvider>());
    validator.assert_registered_with_implementation(&logger_provider(), &key_of::<DebugLoggerProvider>());

    assert!(validator.is_valid());
}

#[test]
fn assert_implementation_mismatch_is_an_error() {
    struct FileLoggerProvider;

    let (registry, introspection) = setup();
    let mut validator = DependencyValidator::new(&registry, &introspection);

    validator.assert_registered_with_implementation(&logger_provider(), &key_of::<FileLoggerProvider>());

    assert!(!validator.is_valid());
    let finding = validator
        .findings()
        .iter()
        .find(|f| f.severity == Severity::Error)
        .unwrap();
    assert!(finding.message.contains("does not match the required implementation"));
}

#[test]
fn assert_registration_checks_implementation_and_lifetime() {
    let (registry, introspection) = setup();
    let mut validator = DependencyValidator::new(&registry, &introspection);

    validator.assert_registration(&weather(), &key_of::<WeatherService>(), Lifetime::Scoped);
    assert!(validator.is_valid());

    validator.assert_registration(&weather(), &key_of::<WeatherService>(), Lifetime::Transient);
    assert!(!validator.is_valid());
}

#[test]
fn assertions_reevaluate_after_a_prior_walk() {
    let (registry, introspection) = setup();
    let mut validator = DependencyValidator::new(&registry, &introspection);

    // The full walk marks everything visited...
    validator.validate_all();
    assert!(validator.is_valid());

    // ...but assertions purge their identity's visited records, so the
    // lifetime expectation is still evaluated rather than short-circuited.
    validator.assert_registered_with_lifetime(&weather(), Lifetime::Singleton);
    assert!(!validator.is_valid());
}

#[test]
fn repeated_assertions_with_different_expectations_are_independent() {
    let (registry, introspection) = setup();
    let mut validator = DependencyValidator::new(&registry, &introspection);

    validator.assert_registered_with_lifetime(&weather(), Lifetime::Scoped);
    assert!(validator.is_valid());

    validator.assert_registered_with_lifetime(&weather(), Lifetime::Singleton);
    assert!(!validator.is_valid());

    // The failure already recorded stays; a later correct assertion does not
    // erase findings, it only avoids adding new ones.
    validator.assert_registered_with_lifetime(&weather(), Lifetime::Scoped);
    assert!(!validator.is_valid());
    assert_eq!(
        validator
            .findings()
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count(),
        1
    );
}
