use derive_more::IsVariant;

/// A value that is either a single item or a list of further nested values, for use with
/// [`flat_depth`](super::adapters::flat_depth) where the nesting depth is only known at runtime.
///
/// Ordinary [`flat`](super::adapters::flat) works on any [`IntoIterator`] items, but can only
/// remove one statically known level at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, IsVariant)]
pub enum Nested<T> {
    Atom(T),
    List(Vec<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Atom(value)
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self {
        Nested::List(iter.into_iter().collect())
    }
}
