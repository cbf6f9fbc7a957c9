use super::{Comma, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);
        let ty = &self.ty;

        fmt!(f, name " " ty);

        if self.auto_increment {
            fmt!(f, " GENERATED BY DEFAULT AS IDENTITY");
        }

        if !self.nullable {
            fmt!(f, " NOT NULL");
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let name = &self.name;
        let columns = Comma(&self.columns);

        fmt!(f, "CREATE TABLE " name " (" columns);

        if !self.primary_key.is_empty() {
            let pk = Comma(self.primary_key.iter().map(Ident));
            fmt!(f, ", PRIMARY KEY (" pk ")");
        }

        fmt!(f, ")");
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        let name = &self.name;

        fmt!(f, "DROP TABLE " if_exists name);
    }
}
