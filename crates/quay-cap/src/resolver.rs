use crate::error::ResolveError;

/// Reduces the sibling versions of one key to a single logical value.
///
/// `Ok(None)` means the key is absent, which is also what an empty sibling
/// vector represents on input. Implementations must be pure functions of
/// their input: a store operation invokes its resolver once on the fetched
/// state and, when a response body was requested, once more on the
/// post-write state.
pub trait ConflictResolver<T>: Send + Sync {
    fn resolve(&self, siblings: Vec<T>) -> Result<Option<T>, ResolveError>;
}

/// The strategy of refusing to guess: a lone sibling passes through,
/// absence stays absent, and anything more fails with
/// [`ResolveError::UnresolvedConflict`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultResolver;

impl DefaultResolver {
    pub fn new() -> Self {
        Self
    }
}

impl<T> ConflictResolver<T> for DefaultResolver {
    fn resolve(&self, mut siblings: Vec<T>) -> Result<Option<T>, ResolveError> {
        match siblings.len() {
            0 => Ok(None),
            1 => Ok(siblings.pop()),
            n => Err(ResolveError::UnresolvedConflict { siblings: n }),
        }
    }
}

/// Adapter turning a plain function into a resolver.
pub struct ResolverFn<F>(F);

impl<F> ResolverFn<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T, F> ConflictResolver<T> for ResolverFn<F>
where
    F: Fn(Vec<T>) -> Result<Option<T>, ResolveError> + Send + Sync,
{
    fn resolve(&self, siblings: Vec<T>) -> Result<Option<T>, ResolveError> {
        (self.0)(siblings)
    }
}
