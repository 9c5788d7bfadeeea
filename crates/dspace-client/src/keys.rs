//! Dublin Core metadata keys used by thesis records

pub const AUTHOR: &str = "dc.contributor.author";
pub const ADVISOR: &str = "dc.contributor.advisor";
pub const TYPE: &str = "dc.type";
pub const TITLE: &str = "dc.title";
pub const URI: &str = "dc.identifier.uri";
pub const DATE_ISSUED: &str = "dc.date.issued";

/// `dc.type` value carried by theses
pub const THESIS_TYPE: &str = "Thesis";
