use crate::stmt::ValueRecord;

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result: column names and one record per row
    Values {
        columns: Vec<String>,
        records: Vec<ValueRecord>,
    },
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(columns: Vec<String>, records: Vec<ValueRecord>) -> Self {
        Self {
            rows: Rows::Values { columns, records },
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values { .. })
    }

    /// Splits into column names and records; a count yields no rows.
    pub fn into_values(self) -> (Vec<String>, Vec<ValueRecord>) {
        match self {
            Self::Values { columns, records } => (columns, records),
            Self::Count(_) => (vec![], vec![]),
        }
    }
}
