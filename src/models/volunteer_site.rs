use serde::{Deserialize, Serialize};

use super::{Entity, FieldSpec};

/// An institution or place that hosts volunteer work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerSite {
    pub name: String,
    pub email: String,
    pub contact: String,
    /// City or region, used for location lookups
    pub location: String,
    /// Street address
    pub address: String,
    pub available: bool,
    /// Kind of work offered at the site
    pub task: String,
}

impl Entity for VolunteerSite {
    const NAME: &'static str = "VolunteerSite";
    const COLLECTION: &'static str = "volunteersites";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name"),
        FieldSpec::text("email"),
        FieldSpec::text("contact"),
        FieldSpec::text("location"),
        FieldSpec::text("address"),
        FieldSpec::boolean("available"),
        FieldSpec::text("task"),
    ];
}
