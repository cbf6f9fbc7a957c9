/// A possibly schema-qualified table name.
#[derive(Debug, Clone, PartialEq)]
pub struct Name(pub Vec<String>);

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name(vec![value.to_string()])
    }
}
