/// Produces the value to write from what the fetch resolved to.
///
/// `None` means the key was absent. Mutations are assumed pure and total;
/// a configured operation may apply the same mutation on every execution.
pub trait Mutation<T>: Send + Sync {
    fn apply(&self, current: Option<T>) -> T;
}

/// Unconditional overwrite: ignores the current value entirely.
pub struct Clobber<T>(T);

impl<T: Clone> Clobber<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }
}

impl<T> Mutation<T> for Clobber<T>
where
    T: Clone + Send + Sync,
{
    fn apply(&self, _current: Option<T>) -> T {
        self.0.clone()
    }
}

/// Adapter turning a plain function into a mutation.
pub struct MutationFn<F>(F);

impl<F> MutationFn<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T, F> Mutation<T> for MutationFn<F>
where
    F: Fn(Option<T>) -> T + Send + Sync,
{
    fn apply(&self, current: Option<T>) -> T {
        (self.0)(current)
    }
}
