//! Service lifetime definitions and the lifetime-capture lattice.

/// Service lifetimes controlling instance sharing scope
///
/// Ordered by lifespan: a Singleton outlives every Scoped instance, which in
/// turn outlives every Transient instance. The validator never creates
/// instances; lifetimes only feed the capture lattice below.
///
/// # Examples
///
/// ```rust
/// use wirecheck::Lifetime;
///
/// // A transient consumer may depend on anything
/// assert!(Lifetime::Transient.can_depend_on(Lifetime::Singleton));
/// assert!(Lifetime::Transient.can_depend_on(Lifetime::Transient));
///
/// // A singleton must not capture shorter-lived services
/// assert!(!Lifetime::Singleton.can_depend_on(Lifetime::Scoped));
/// assert!(!Lifetime::Singleton.can_depend_on(Lifetime::Transient));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifetime {
    /// Single instance per process, shared everywhere
    Singleton,
    /// Single instance per logical unit of work (request scope)
    Scoped,
    /// New instance per resolution, never cached
    Transient,
}

impl Lifetime {
    /// Lifetime-capture lattice: may a consumer of this lifetime depend on a
    /// service of `child` lifetime?
    ///
    /// Incompatible exactly when a Singleton depends on Scoped or Transient,
    /// or a Scoped depends on Transient. The validator reports violations as
    /// warnings rather than errors, since factory-mediated patterns the
    /// static walk cannot see often make such captures safe in practice.
    pub fn can_depend_on(self, child: Lifetime) -> bool {
        !matches!(
            (self, child),
            (Lifetime::Singleton, Lifetime::Scoped)
                | (Lifetime::Singleton, Lifetime::Transient)
                | (Lifetime::Scoped, Lifetime::Transient)
        )
    }
}

impl std::fmt::Display for Lifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lifetime::Singleton => write!(f, "Singleton"),
            Lifetime::Scoped => write!(f, "Scoped"),
            Lifetime::Transient => write!(f, "Transient"),
        }
    }
}
