use serde::{Deserialize, Serialize};

use super::{Entity, FieldSpec};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub gender: String,
    /// Whether the volunteer can currently take on work
    pub available: bool,
}

impl Entity for Volunteer {
    const NAME: &'static str = "Volunteer";
    const COLLECTION: &'static str = "volunteers";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name"),
        FieldSpec::integer("age"),
        FieldSpec::text("email"),
        FieldSpec::text("gender"),
        FieldSpec::boolean("available"),
    ];
}
