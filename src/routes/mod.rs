pub mod records;
pub mod volunteer_sites;
pub mod volunteers;
