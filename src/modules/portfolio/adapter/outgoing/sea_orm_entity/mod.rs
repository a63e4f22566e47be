pub mod certifications;
pub mod educations;
pub mod experiences;
pub mod other_links;
pub mod profiles;
pub mod projects;
pub mod skills;
