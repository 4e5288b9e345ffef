//! Service identity keys for the registry validator.

use std::any::TypeId;

/// Identity of a requestable type in the service universe.
///
/// Keys identify both service identities (what a consumer asks for) and
/// implementation identities (what is registered to satisfy them). The
/// universe is partially open: concrete Rust types carry a `TypeId`, while
/// abstractions, generic shapes, and framework capabilities are named
/// symbolically so that metadata supplied by a [`TypeIntrospector`] can refer
/// to types the validator never links against.
///
/// [`TypeIntrospector`]: crate::TypeIntrospector
///
/// # Examples
///
/// ```rust
/// use wirecheck::{ServiceKey, key_of};
///
/// struct ConsoleLogger;
///
/// // Concrete types get TypeId-backed keys
/// let logger_impl = key_of::<ConsoleLogger>();
/// assert!(logger_impl.display_name().contains("ConsoleLogger"));
///
/// // Abstractions are named symbolically
/// let logger = ServiceKey::Trait("dyn app::Logger");
/// assert_eq!(logger.display_name(), "dyn app::Logger");
///
/// // Closed generic shapes carry their argument keys
/// let repo = ServiceKey::generic("app::Repository", vec![key_of::<ConsoleLogger>()]);
/// assert_eq!(repo.generic_definition(), Some(ServiceKey::OpenGeneric("app::Repository")));
/// ```
#[derive(Debug, Clone)]
pub enum ServiceKey {
    /// Concrete type key with TypeId and name for diagnostics
    Type(TypeId, &'static str),
    /// Abstraction named by its trait-object path, e.g. `"dyn app::Logger"`
    Trait(&'static str),
    /// Closed parameterized shape: generic definition name plus argument keys
    Generic(&'static str, Vec<ServiceKey>),
    /// Unparameterized generic definition, the target of open-generic registrations
    OpenGeneric(&'static str),
    /// Collection-of-T shape; resolves to an empty collection when nothing matches
    Sequence(Box<ServiceKey>),
    /// The ambient resolver/provider capability, always resolvable
    Provider,
}

impl ServiceKey {
    /// Builds a closed generic key from a definition name and argument keys.
    pub fn generic(definition: &'static str, arguments: Vec<ServiceKey>) -> Self {
        ServiceKey::Generic(definition, arguments)
    }

    /// Builds a sequence key wrapping the element identity.
    pub fn sequence(element: ServiceKey) -> Self {
        ServiceKey::Sequence(Box::new(element))
    }

    /// Human-readable rendering for findings and reports.
    pub fn display_name(&self) -> String {
        match self {
            ServiceKey::Type(_, name) => (*name).to_string(),
            ServiceKey::Trait(name) => (*name).to_string(),
            ServiceKey::Generic(definition, arguments) => {
                let args: Vec<String> = arguments.iter().map(|a| a.display_name()).collect();
                format!("{}<{}>", definition, args.join(", "))
            }
            ServiceKey::OpenGeneric(definition) => format!("{}<>", definition),
            ServiceKey::Sequence(element) => format!("Vec<{}>", element.display_name()),
            ServiceKey::Provider => "Resolver".to_string(),
        }
    }

    /// The unparameterized generic definition behind a closed generic shape,
    /// or `None` for keys without one.
    ///
    /// A closed-generic request matches an open-generic registration through
    /// this definition, mirroring how real containers satisfy
    /// `Repository<User>` from a `Repository<>` registration.
    pub fn generic_definition(&self) -> Option<ServiceKey> {
        match self {
            ServiceKey::Generic(definition, _) => Some(ServiceKey::OpenGeneric(definition)),
            _ => None,
        }
    }
}

// Hot-path equality: TypeId-only comparison for concrete types, structural
// for symbolic variants. Different variants never compare equal.
impl PartialEq for ServiceKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ServiceKey::Type(a, _), ServiceKey::Type(b, _)) => a == b,
            (ServiceKey::Trait(a), ServiceKey::Trait(b)) => a == b,
            (ServiceKey::Generic(a, args_a), ServiceKey::Generic(b, args_b)) => {
                a == b && args_a == args_b
            }
            (ServiceKey::OpenGeneric(a), ServiceKey::OpenGeneric(b)) => a == b,
            (ServiceKey::Sequence(a), ServiceKey::Sequence(b)) => a == b,
            (ServiceKey::Provider, ServiceKey::Provider) => true,
            _ => false,
        }
    }
}

impl Eq for ServiceKey {}

impl std::hash::Hash for ServiceKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            ServiceKey::Type(id, _) => {
                0u8.hash(state); // Discriminant
                id.hash(state);
            }
            ServiceKey::Trait(name) => {
                1u8.hash(state);
                name.hash(state);
            }
            ServiceKey::Generic(definition, arguments) => {
                2u8.hash(state);
                definition.hash(state);
                arguments.hash(state);
            }
            ServiceKey::OpenGeneric(definition) => {
                3u8.hash(state);
                definition.hash(state);
            }
            ServiceKey::Sequence(element) => {
                4u8.hash(state);
                element.hash(state);
            }
            ServiceKey::Provider => {
                5u8.hash(state);
            }
        }
    }
}

impl std::fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Helper for creating concrete type keys.
#[inline]
pub fn key_of<T: 'static>() -> ServiceKey {
    ServiceKey::Type(std::any::TypeId::of::<T>(), std::any::type_name::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_keys_compare_by_type_id() {
        assert_eq!(key_of::<String>(), key_of::<String>());
        assert_ne!(key_of::<String>(), key_of::<u32>());
    }

    #[test]
    fn variants_never_cross_compare() {
        assert_ne!(ServiceKey::Trait("dyn app::Logger"), ServiceKey::OpenGeneric("dyn app::Logger"));
        assert_ne!(key_of::<String>(), ServiceKey::Provider);
    }

    #[test]
    fn generic_definition_of_closed_generic() {
        let closed = ServiceKey::generic("app::Repository", vec![key_of::<u32>()]);
        assert_eq!(closed.generic_definition(), Some(ServiceKey::OpenGeneric("app::Repository")));
        assert_eq!(key_of::<u32>().generic_definition(), None);
        assert_eq!(ServiceKey::Provider.generic_definition(), None);
    }

    #[test]
    fn display_names() {
        let closed = ServiceKey::generic("app::Repository", vec![ServiceKey::Trait("dyn app::Entity")]);
        assert_eq!(closed.display_name(), "app::Repository<dyn app::Entity>");
        assert_eq!(ServiceKey::OpenGeneric("app::Repository").display_name(), "app::Repository<>");
        assert_eq!(
            ServiceKey::sequence(ServiceKey::Trait("dyn app::Handler")).display_name(),
            "Vec<dyn app::Handler>"
        );
    }

    #[test]
    fn sequence_equality_is_structural() {
        let a = ServiceKey::sequence(key_of::<String>());
        let b = ServiceKey::sequence(key_of::<String>());
        let c = ServiceKey::sequence(key_of::<u32>());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
