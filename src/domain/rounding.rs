//! Explicit rounding direction for integer division.

/// Rounding direction of an integer division.
///
/// Every division in the pool names its direction so that truncation is
/// always a deliberate choice: outputs paid by the pool round
/// [`Down`](Rounding::Down), inputs owed to the pool round
/// [`Up`](Rounding::Up).
///
/// # Examples
///
/// ```
/// use pairswap::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert_eq!(Rounding::Up.flip(), Rounding::Down);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn flip(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(Rounding::Up.is_up());
        assert!(!Rounding::Up.is_down());
        assert!(Rounding::Down.is_down());
        assert!(!Rounding::Down.is_up());
    }

    #[test]
    fn flip_is_involution() {
        assert_eq!(Rounding::Up.flip(), Rounding::Down);
        assert_eq!(Rounding::Down.flip().flip(), Rounding::Down);
    }
}
