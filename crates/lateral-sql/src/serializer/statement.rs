use super::{Comma, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Query {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, &self.body);

        if let Some(order_by) = &self.order_by {
            if !order_by.is_empty() {
                fmt!(f, " ORDER BY " Comma(&order_by.exprs));
            }
        }

        if let Some(limit) = &self.limit {
            let limit = &limit.limit;
            fmt!(f, " LIMIT " limit);
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let returning = Comma(&self.returning);
        let source = &self.source;

        fmt!(f, "SELECT " returning " FROM " source);

        // An empty `AND`/`OR` constrains nothing worth rendering
        let filter = self.filter.expr.as_ref().filter(|expr| match expr {
            stmt::Expr::And(and) => !and.operands.is_empty(),
            stmt::Expr::Or(or) => !or.operands.is_empty(),
            _ => true,
        });

        if let Some(expr) = filter {
            fmt!(f, " WHERE " expr);
        }
    }
}

impl ToSql for &stmt::SelectItem {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::SelectItem::Expr(expr) => expr.to_sql(f),
            stmt::SelectItem::Alias { expr, alias } => {
                fmt!(f, expr " AS " alias);
            }
            stmt::SelectItem::Wildcard(table) => {
                fmt!(f, Ident(table.qualifier()) ".*");
            }
        }
    }
}

impl ToSql for &stmt::TableWithJoins {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, &self.relation);

        for join in &self.joins {
            fmt!(f, join);
        }
    }
}

impl ToSql for &stmt::TableFactor {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::TableFactor::Table(stmt::TableRef::Table { name, alias }) => {
                fmt!(f, Ident(name));

                if let Some(alias) = alias {
                    fmt!(f, " " Ident(alias));
                }
            }
            stmt::TableFactor::Table(stmt::TableRef::Derived { name }) => {
                fmt!(f, Ident(name));
            }
            stmt::TableFactor::Derived {
                lateral,
                subquery,
                alias,
            } => {
                let lateral = if *lateral { "LATERAL " } else { "" };
                let subquery = &**subquery;
                fmt!(f, lateral "(" subquery ") " alias);
            }
        }
    }
}

impl ToSql for &stmt::Join {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let relation = &self.relation;

        match &self.constraint {
            stmt::JoinOp::Inner(expr) => {
                fmt!(f, " INNER JOIN " relation " ON " expr);
            }
            stmt::JoinOp::Left(expr) => {
                fmt!(f, " LEFT JOIN " relation " ON " expr);
            }
        }
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, &self.expr);

        match self.order {
            Some(stmt::Direction::Asc) => fmt!(f, " ASC"),
            Some(stmt::Direction::Desc) => fmt!(f, " DESC"),
            None => {}
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "INSERT INTO " Ident(self.table.name()));

        if self.columns.is_empty() {
            fmt!(f, " DEFAULT VALUES");
        } else {
            let columns = Comma(self.columns.iter().map(Ident));
            let values = Comma(&self.values);
            fmt!(f, " (" columns ") VALUES (" values ")");
        }

        if self.returning {
            fmt!(f, " RETURNING *");
        }
    }
}
