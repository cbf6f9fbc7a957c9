use super::{Comma, Delimited, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            // An empty conjunction holds; an empty disjunction never does.
            And(expr) if expr.operands.is_empty() => fmt!(f, "TRUE"),
            And(expr) => {
                let operands = expr.operands.iter().map(Operand);
                fmt!(f, Delimited(operands, " AND "));
            }
            BinaryOp(expr) => {
                let lhs = &*expr.lhs;
                let op = &expr.op;
                let rhs = &*expr.rhs;
                fmt!(f, lhs " " op " " rhs);
            }
            Column(expr) => expr.to_sql(f),
            Grouping(expr) => {
                let inner = &*expr.expr;
                fmt!(f, "(" inner ")");
            }
            InList(expr) if expr.list.is_empty() => {
                // `x IN ()` is not valid SQL; an empty list never matches.
                fmt!(f, "FALSE");
            }
            InList(expr) => {
                let lhs = &*expr.expr;
                let list = Comma(&expr.list);
                fmt!(f, lhs " IN (" list ")");
            }
            IsNull(expr) => {
                let operand = &*expr.expr;

                if expr.negate {
                    fmt!(f, operand " IS NOT NULL");
                } else {
                    fmt!(f, operand " IS NULL");
                }
            }
            Not(expr) => {
                let operand = Operand(&expr.expr);
                fmt!(f, "NOT " operand);
            }
            Or(expr) if expr.operands.is_empty() => fmt!(f, "FALSE"),
            Or(expr) => {
                fmt!(f, Delimited(&expr.operands, " OR "));
            }
            Value(expr) => expr.to_sql(f),
        }
    }
}

/// An operand of `AND` or `NOT`. `AND` binds tighter than `OR` and `NOT`
/// tighter than both, so nested conjunctions and disjunctions are
/// parenthesized.
struct Operand<'a>(&'a stmt::Expr);

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let expr = self.0;

        match expr {
            stmt::Expr::And(junction) if junction.operands.len() > 1 => fmt!(f, "(" expr ")"),
            stmt::Expr::Or(junction) if junction.operands.len() > 1 => fmt!(f, "(" expr ")"),
            _ => expr.to_sql(f),
        }
    }
}

impl ToSql for &stmt::ExprColumn {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(self.table.qualifier());
        let column = Ident(&self.column);

        fmt!(f, table "." column);
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Ne => "<>",
        })
    }
}
