use super::{Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Value::*;

        match self {
            Bool(true) => fmt!(f, "TRUE"),
            Bool(false) => fmt!(f, "FALSE"),
            Null => fmt!(f, "NULL"),
            I64(v) if f.inline => f.dst.push_str(&v.to_string()),
            String(v) if f.inline => {
                f.dst.push('\'');
                f.dst.push_str(&v.replace('\'', "''"));
                f.dst.push('\'');
            }
            value => {
                let placeholder = f.params.push(value);
                fmt!(f, placeholder);
            }
        }
    }
}
