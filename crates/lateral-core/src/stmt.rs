mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_grouping;
pub use expr_grouping::ExprGrouping;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinOp};

mod limit;
pub use limit::Limit;

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by;
pub use order_by::OrderBy;

mod order_by_expr;
pub use order_by_expr::OrderByExpr;

mod query;
pub use query::Query;

mod select;
pub use select::Select;

mod select_item;
pub use select_item::SelectItem;

mod statement;
pub use statement::Statement;

mod table_factor;
pub use table_factor::TableFactor;

mod table_ref;
pub use table_ref::TableRef;

mod table_with_joins;
pub use table_with_joins::TableWithJoins;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;
