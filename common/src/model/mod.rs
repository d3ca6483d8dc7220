pub mod partner_site;
pub mod submission;
