//! Two component vector.

/// A two component vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Vector2<T> {
    /// The x component.
    pub x: T,
    /// The y component (the z axis when used for chunk columns).
    pub y: T,
}

impl<T> Vector2<T> {
    /// Creates a new vector.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}
