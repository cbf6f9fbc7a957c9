use super::Error;

/// Error when an association name is not registered on a model.
#[derive(Debug)]
pub(super) struct UnknownAssociation {
    model: Box<str>,
    name: Box<str>,
}

impl std::error::Error for UnknownAssociation {}

impl core::fmt::Display for UnknownAssociation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown association `{}` on model `{}`",
            self.name, self.model
        )
    }
}

impl Error {
    pub fn unknown_association(model: impl Into<String>, name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownAssociation(UnknownAssociation {
            model: model.into().into(),
            name: name.into().into(),
        }))
    }

    pub fn is_unknown_association(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownAssociation(_))
    }
}
