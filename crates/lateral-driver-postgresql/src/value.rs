use lateral_core::{stmt, Error, Result};
use postgres::{
    types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type},
    Row,
};

/// Binds a [`stmt::Value`] as a statement parameter.
#[derive(Debug)]
pub struct Value(stmt::Value);

impl From<stmt::Value> for Value {
    fn from(value: stmt::Value) -> Self {
        Self(value)
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
    where
        Self: Sized,
    {
        match &self.0 {
            stmt::Value::Bool(value) => value.to_sql(ty, out),
            // Parameter types are inferred by the server, so an integer may
            // land in a narrower column.
            stmt::Value::I64(value) => match *ty {
                Type::INT2 => i16::try_from(*value)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*value)?.to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::Null => Ok(IsNull::Yes),
            stmt::Value::String(value) => value.to_sql(ty, out),
        }
    }

    accepts!(BOOL, INT2, INT4, INT8, TEXT, VARCHAR);
    to_sql_checked!();
}

/// Reads column `index` of `row` as a [`stmt::Value`].
pub(crate) fn from_row(row: &Row, index: usize) -> Result<stmt::Value> {
    let column = &row.columns()[index];
    let ty = column.type_();

    // The type enum's representation is private, so each type is matched by
    // comparison.
    let value = if ty == &Type::TEXT || ty == &Type::VARCHAR {
        row.try_get::<_, Option<String>>(index).map(stmt::Value::from)
    } else if ty == &Type::BOOL {
        row.try_get::<_, Option<bool>>(index).map(stmt::Value::from)
    } else if ty == &Type::INT2 {
        row.try_get::<_, Option<i16>>(index)
            .map(|value| stmt::Value::from(value.map(i64::from)))
    } else if ty == &Type::INT4 {
        row.try_get::<_, Option<i32>>(index)
            .map(|value| stmt::Value::from(value.map(i64::from)))
    } else if ty == &Type::INT8 {
        row.try_get::<_, Option<i64>>(index).map(stmt::Value::from)
    } else {
        return Err(Error::unsupported_feature(format!(
            "column `{}` has unsupported type `{ty}`",
            column.name()
        )));
    };

    value.map_err(Error::driver)
}
