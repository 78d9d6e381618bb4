//! Absent-graph sentinel and null-aware payloads.

use super::Value;

/// One input's contribution to a zipped node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot<V> {
    /// The input graph has no node at this position.
    Absent,
    /// The input graph has a node here, with this value.
    Present(V),
}

impl<V> Slot<V> {
    /// Check if the input graph had no node here.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Check if the input graph had a node here.
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the value, if present.
    pub const fn as_present(&self) -> Option<&V> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent => None,
        }
    }

    /// Convert into an `Option`, mapping `Absent` to `None`.
    pub fn into_option(self) -> Option<V> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent => None,
        }
    }

    /// The present value, or `default` when absent.
    pub fn unwrap_or(self, default: V) -> V {
        self.into_option().unwrap_or(default)
    }
}

impl<V> From<Option<V>> for Slot<V> {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

/// Payloads with a null value and an optional omission marker.
pub trait Nullable {
    /// The null value.
    fn null() -> Self;

    /// Check if this is the null value.
    fn is_null(&self) -> bool;

    /// Check if this is the omission marker used by overlays.
    fn is_omit(&self) -> bool {
        false
    }
}

impl<T> Nullable for Option<T> {
    fn null() -> Self {
        None
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl Nullable for Value {
    fn null() -> Self {
        Self::Null
    }

    fn is_null(&self) -> bool {
        Value::is_null(self)
    }

    fn is_omit(&self) -> bool {
        matches!(self, Self::Omit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_accessors() {
        let present = Slot::Present(3);
        let absent: Slot<i32> = Slot::Absent;

        assert!(present.is_present());
        assert!(absent.is_absent());
        assert_eq!(present.as_present(), Some(&3));
        assert_eq!(absent.as_present(), None);
        assert_eq!(present.clone().unwrap_or(7), 3);
        assert_eq!(absent.clone().unwrap_or(7), 7);
        assert_eq!(Slot::from(Some(1)), Slot::Present(1));
        assert_eq!(Slot::<i32>::from(None), Slot::Absent);
    }

    #[test]
    fn test_present_null_is_not_absent() {
        let slot: Slot<Option<i32>> = Slot::Present(None);
        assert!(slot.is_present());
        assert_eq!(slot.into_option(), Some(None));
    }

    #[test]
    fn test_nullable_impls() {
        assert!(Option::<i32>::null().is_null());
        assert!(!Some(1).is_null());
        assert!(!Some(1).is_omit());

        assert!(Value::null().is_null());
        assert!(Value::Omit.is_omit());
        assert!(!Value::Omit.is_null());
        assert!(!Value::from("x").is_null());
    }
}
