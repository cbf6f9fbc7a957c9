//! Rebinds a relation from its root table to an alias of that table.

use crate::Relation;

use lateral_core::stmt::{
    BinaryOp, Expr, ExprAnd, ExprBinaryOp, ExprGrouping, ExprInList, ExprOr, OrderByExpr, TableRef,
};

/// Returns a copy of `relation` rooted at `"table" "alias"`.
///
/// Column references in the predicate and `ORDER BY` that point at the
/// original table are rewritten to the alias. Only conjunctions,
/// disjunctions, groupings and the left-hand column of `=`, `>`, `<` and
/// `IN` are visited. Anything else (`NOT`, `IS NULL`, `>=`, ...) is kept
/// as is, so references inside such nodes keep their old qualifier.
///
/// The projection is reset to the model's default, which follows the new
/// root. Joins and the limit carry over unchanged.
pub fn alias_table(relation: &Relation, alias: &str) -> Relation {
    let original = relation.table().clone();
    let aliased = TableRef::aliased(original.name(), alias);

    let filter = relation
        .predicate()
        .and_then(|expr| rewrite_expr(expr, &original, &aliased));

    let order_by: Vec<_> = relation
        .order()
        .iter()
        .map(|order_by| rewrite_order_by(order_by, &original, &aliased))
        .collect();

    let mut rewritten = relation
        .clone()
        .unscope_select()
        .unscope_where()
        .unscope_order()
        .with_table(aliased);

    if let Some(filter) = filter {
        rewritten = rewritten.filter(filter);
    }

    order_by
        .into_iter()
        .fold(rewritten, |rewritten, order_by| rewritten.order_by(order_by))
}

/// Returns `None` when nothing is left of the expression, e.g. an empty
/// conjunction.
fn rewrite_expr(expr: &Expr, original: &TableRef, aliased: &TableRef) -> Option<Expr> {
    match expr {
        Expr::And(and) => {
            let operands: Vec<_> = and
                .operands
                .iter()
                .filter_map(|operand| rewrite_expr(operand, original, aliased))
                .collect();

            match operands.len() {
                0 => None,
                _ => Some(ExprAnd { operands }.into()),
            }
        }
        Expr::Or(or) => {
            let operands: Vec<_> = or
                .operands
                .iter()
                .filter_map(|operand| rewrite_expr(operand, original, aliased))
                .collect();

            match operands.len() {
                0 => None,
                _ => Some(ExprOr { operands }.into()),
            }
        }
        Expr::Grouping(grouping) => {
            let inner = rewrite_expr(&grouping.expr, original, aliased)?;

            Some(
                ExprGrouping {
                    expr: Box::new(inner),
                }
                .into(),
            )
        }
        Expr::BinaryOp(binary_op) if is_rewritten_op(binary_op) => Some(
            ExprBinaryOp {
                lhs: Box::new(rebind(&binary_op.lhs, original, aliased)),
                op: binary_op.op,
                rhs: binary_op.rhs.clone(),
            }
            .into(),
        ),
        Expr::InList(in_list) => Some(
            ExprInList {
                expr: Box::new(rebind(&in_list.expr, original, aliased)),
                list: in_list.list.clone(),
            }
            .into(),
        ),
        _ => Some(expr.clone()),
    }
}

fn is_rewritten_op(binary_op: &ExprBinaryOp) -> bool {
    matches!(binary_op.op, BinaryOp::Eq | BinaryOp::Gt | BinaryOp::Lt)
}

fn rewrite_order_by(order_by: &OrderByExpr, original: &TableRef, aliased: &TableRef) -> OrderByExpr {
    OrderByExpr {
        expr: rebind(&order_by.expr, original, aliased),
        order: order_by.order,
    }
}

/// Rebinds `expr` if it is a column of `original`.
fn rebind(expr: &Expr, original: &TableRef, aliased: &TableRef) -> Expr {
    match expr {
        Expr::Column(column) if column.table.is_same_table(original) => {
            column.rebind(aliased).into()
        }
        _ => expr.clone(),
    }
}
