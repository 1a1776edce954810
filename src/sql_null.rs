use crate::null::Nullable;

/// Value/validity pair in the shape database drivers bind columns with.
///
/// Unlike `Nullable`, the fields are public and a NULL pair may still carry a
/// stale value, so equality here is plain field-by-field comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SqlNull<T> {
    pub value: T,
    pub valid: bool,
}

impl<T> SqlNull<T> {
    pub fn new(value: T, valid: bool) -> Self {
        Self { value, valid }
    }
}

impl<T: Default> From<SqlNull<T>> for Nullable<T> {
    fn from(value: SqlNull<T>) -> Self {
        Self::from_sql_null(value)
    }
}

impl<T> From<Nullable<T>> for SqlNull<T> {
    fn from(value: Nullable<T>) -> Self {
        let (value, valid) = value.into_inner();
        Self { value, valid }
    }
}
