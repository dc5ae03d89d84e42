use std::collections::BTreeMap;

/// A source of environment variables.
///
/// Builders never read the process environment directly; they go through an
/// `Environment` so that the lookups can be replaced in tests and overlaid
/// with values from a configuration file.
pub trait Environment {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads variables from the environment of the current process.
///
/// Values that are not valid Unicode are treated as unset.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> { std::env::var(key).ok() }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> { self.get(key).cloned() }
}

impl<E> Environment for &E
where
    E: Environment + ?Sized,
{
    fn var(&self, key: &str) -> Option<String> { (**self).var(key) }
}

/// Overlays two environments, the first one taking precedence. An empty
/// value in the first counts as unset.
impl<A, B> Environment for (A, B)
where
    A: Environment,
    B: Environment,
{
    fn var(&self, key: &str) -> Option<String> {
        let (first, second) = self;
        first.var(key).filter(|value| !value.is_empty()).or_else(|| second.var(key))
    }
}
