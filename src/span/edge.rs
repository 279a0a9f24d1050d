use derive_more::IsVariant;

/// One of the two ends of a span or view, used to pick the end that elements are removed from or
/// added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Edge {
    /// The end containing the first element.
    Front,
    /// The end containing the last element.
    Back,
}
