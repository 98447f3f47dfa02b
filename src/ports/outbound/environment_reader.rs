/// EnvironmentReader port for reading override variables
///
/// This port abstracts access to the process environment so the resolver
/// can be exercised against an in-memory environment.
pub trait EnvironmentReader {
    /// Returns the value of the variable `name`
    ///
    /// # Returns
    /// `None` if the variable is unset or cannot be read as UTF-8.
    /// An empty value is returned as `Some("")`.
    fn var(&self, name: &str) -> Option<String>;
}

impl<E: EnvironmentReader + ?Sized> EnvironmentReader for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
