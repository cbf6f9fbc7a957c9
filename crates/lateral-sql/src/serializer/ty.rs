use super::{Params, ToSql};

use lateral_core::schema::db;

impl ToSql for &db::Type {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        fmt!(
            f,
            match self {
                db::Type::Boolean => "BOOLEAN",
                db::Type::Integer(1..=2) => "INT2",
                db::Type::Integer(3..=4) => "INT4",
                db::Type::Integer(_) => "INT8",
                db::Type::Text => "TEXT",
            }
        );
    }
}
