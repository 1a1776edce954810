use std::hash::{Hash, Hasher};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::sql_null::SqlNull;

/// Untyped NULL marker, so a NULL of any `Nullable<T>` can be written `NULL.into()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Null {}

impl Null {
    pub fn null() -> Self {
        Self {}
    }
}

pub static NULL: Null = Null {};

/// A value of type `T`, or NULL.
///
/// NULL is tracked by a separate validity flag, never by a sentinel value of `T`.
/// While NULL the stored value is always `T::default()`, so two NULLs of the same
/// type cannot be told apart. Every mutation replaces value and flag together.
#[derive(Debug, Clone, Copy)]
pub struct Nullable<T> {
    value: T,
    valid: bool,
}

impl<T> Nullable<T> {
    pub const fn new(value: T) -> Self {
        Self { value, valid: true }
    }

    pub fn set_value(&mut self, value: T) {
        *self = Self::new(value);
    }

    pub fn is_null(&self) -> bool {
        !self.valid
    }

    /// Stored value and validity flag. The value is `T::default()` when NULL.
    pub fn get(&self) -> (&T, bool) {
        (&self.value, self.valid)
    }

    pub fn into_inner(self) -> (T, bool) {
        (self.value, self.valid)
    }

    pub fn value_or(&self, fallback: T) -> T
    where
        T: Clone
    {
        if self.valid {
            self.value.clone()
        } else {
            fallback
        }
    }

    /// Read-only view of the value, `None` when NULL.
    pub fn as_option(&self) -> Option<&T> {
        if self.valid {
            Some(&self.value)
        } else {
            None
        }
    }

    pub fn into_option(self) -> Option<T> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    pub fn sql_null(&self) -> SqlNull<T>
    where
        T: Clone
    {
        SqlNull::new(self.value.clone(), self.valid)
    }
}

impl<T> Nullable<T>
where
    T: Default
{
    pub fn null() -> Self {
        Self { value: T::default(), valid: false }
    }

    pub fn from_option(value: Option<T>) -> Self {
        match value {
            None => Self::null(),
            Some(value) => Self::new(value),
        }
    }

    /// Copies the referenced value; the result never aliases `value`.
    pub fn from_ref(value: Option<&T>) -> Self
    where
        T: Clone
    {
        Self::from_option(value.cloned())
    }

    /// A NULL pair yields a NULL whose stored value is reset to `T::default()`.
    pub fn from_sql_null(value: SqlNull<T>) -> Self {
        if value.valid {
            Self::new(value.value)
        } else {
            Self::null()
        }
    }

    pub fn set_null(&mut self) {
        *self = Self::null();
    }

    pub fn set(&mut self, value: Option<T>) {
        *self = Self::from_option(value);
    }

    pub fn set_ref(&mut self, value: Option<&T>)
    where
        T: Clone
    {
        *self = Self::from_ref(value);
    }

    pub fn set_sql_null(&mut self, value: SqlNull<T>) {
        *self = Self::from_sql_null(value);
    }

    /// Takes the value out, leaving NULL in its place.
    pub fn take(&mut self) -> Option<T> {
        std::mem::take(self).into_option()
    }
}

/// NULL-aware comparison: two NULLs are equal, NULL never equals a value.
pub fn equal<T: PartialEq>(a: &Nullable<T>, b: &Nullable<T>) -> bool {
    a.valid == b.valid && (!a.valid || a.value == b.value)
}

impl<T: PartialEq> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        equal(self, other)
    }
}

impl<T: Eq> Eq for Nullable<T> {}

impl<T: Hash> Hash for Nullable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.valid.hash(state);
        if self.valid {
            self.value.hash(state);
        }
    }
}

impl<T: Default> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: Default> From<Null> for Nullable<T> {
    fn from(_: Null) -> Self {
        Self::null()
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

impl<T> Serialize for Nullable<T>
where
    T: Serialize
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_option() {
            None => serializer.serialize_none(),
            Some(value) => value.serialize(serializer),
        }
    }
}

// Decoding goes through Option<T> so NULL is detected by the format itself,
// not by comparing against T::default(). Errors return before any state is built.
impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de> + Default
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<T>::deserialize(deserializer)?;
        Ok(Self::from_option(value))
    }
}
