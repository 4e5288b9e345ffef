//! The type-introspection capability the validator consumes.
//!
//! The engine never inspects Rust types directly; everything it knows about
//! constructors and callable signatures comes through [`TypeIntrospector`].
//! That keeps the only runtime-metadata-shaped part of the design behind a
//! trait: reflection, static registration tables, or build-time codegen can
//! all satisfy the same contract. [`StaticIntrospector`] is the table-backed
//! implementation used by tests and by hosts that register metadata by hand.

use std::collections::HashMap;

use crate::key::ServiceKey;

/// One constructor of an implementation type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInfo {
    /// Parameter type identities in declaration order
    pub parameters: Vec<ServiceKey>,
    /// True when annotated as the designated (primary) constructor
    pub designated: bool,
}

/// One instance method of a class-like type, reduced to what the validator
/// needs: its call-site-injected parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    /// Method name, kept for diagnostics
    pub name: &'static str,
    /// Parameters marked as injected at call time, in declaration order
    pub injected_parameters: Vec<ServiceKey>,
}

/// Capability answering the two metadata questions the engine asks.
pub trait TypeIntrospector {
    /// Constructors of an implementation identity, in declaration order.
    /// Unknown types yield no constructors.
    fn constructors(&self, implementation: &ServiceKey) -> Vec<ConstructorInfo>;

    /// Declared instance methods of a class-like identity, each reduced to
    /// its call-site-injected parameters.
    fn methods(&self, class: &ServiceKey) -> Vec<MethodInfo>;
}

/// Metadata for one type in a [`StaticIntrospector`] table.
///
/// Built fluently via [`StaticIntrospector::describe`]:
///
/// ```rust
/// use wirecheck::{ServiceKey, StaticIntrospector, key_of};
///
/// struct WeatherEndpoint;
///
/// let logger = ServiceKey::Trait("dyn app::Logger");
/// let weather = ServiceKey::Trait("dyn app::WeatherService");
///
/// let mut introspection = StaticIntrospector::new();
/// introspection
///     .describe(key_of::<WeatherEndpoint>())
///     .constructor(vec![logger])
///     .method("get", vec![weather]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeMetadata {
    constructors: Vec<ConstructorInfo>,
    methods: Vec<MethodInfo>,
}

impl TypeMetadata {
    /// Declares a constructor with the given parameter identities.
    pub fn constructor(&mut self, parameters: Vec<ServiceKey>) -> &mut Self {
        self.constructors.push(ConstructorInfo {
            parameters,
            designated: false,
        });
        self
    }

    /// Declares the designated (primary) constructor, the one a container is
    /// instructed to use when a type has several.
    pub fn designated_constructor(&mut self, parameters: Vec<ServiceKey>) -> &mut Self {
        self.constructors.push(ConstructorInfo {
            parameters,
            designated: true,
        });
        self
    }

    /// Declares an instance method and its call-site-injected parameters.
    pub fn method(&mut self, name: &'static str, injected_parameters: Vec<ServiceKey>) -> &mut Self {
        self.methods.push(MethodInfo {
            name,
            injected_parameters,
        });
        self
    }
}

/// Table-backed [`TypeIntrospector`].
///
/// The "static registration tables" flavor of introspection: hosts describe
/// their types up front and the validator reads the table. Types absent from
/// the table have no constructors, which drives the "no usable constructors"
/// warning path.
#[derive(Debug, Clone, Default)]
pub struct StaticIntrospector {
    types: HashMap<ServiceKey, TypeMetadata>,
}

impl StaticIntrospector {
    /// Creates an empty metadata table.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Starts (or continues) describing a type, returning its metadata entry
    /// for fluent construction.
    pub fn describe(&mut self, key: ServiceKey) -> &mut TypeMetadata {
        self.types.entry(key).or_default()
    }
}

impl TypeIntrospector for StaticIntrospector {
    fn constructors(&self, implementation: &ServiceKey) -> Vec<ConstructorInfo> {
        self.types
            .get(implementation)
            .map(|meta| meta.constructors.clone())
            .unwrap_or_default()
    }

    fn methods(&self, class: &ServiceKey) -> Vec<MethodInfo> {
        self.types
            .get(class)
            .map(|meta| meta.methods.clone())
            .unwrap_or_default()
    }
}
