use super::Serializer;

#[derive(Debug)]
pub(super) enum Flavor {
    Postgresql,
}

impl Serializer {
    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }
}
