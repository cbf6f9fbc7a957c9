use crate::stmt::Value;

/// Database storage type of a column, as it appears in `CREATE TABLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// Unconstrained text type
    Text,
}

impl Type {
    /// Returns `true` if `value` can be stored in a column of this type.
    ///
    /// `NULL` is accepted by every type; nullability is checked separately
    /// against the column.
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (_, Value::Null)
                | (Type::Boolean, Value::Bool(_))
                | (Type::Integer(_), Value::I64(_))
                | (Type::Text, Value::String(_))
        )
    }
}
