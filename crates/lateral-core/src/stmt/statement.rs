use super::{Insert, Query};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Insert(Insert),
    Query(Query),
}

impl Statement {
    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    pub fn as_query(&self) -> Option<&Query> {
        match self {
            Self::Query(query) => Some(query),
            _ => None,
        }
    }
}

impl From<Query> for Statement {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
