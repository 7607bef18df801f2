// src/extract/mod.rs
//! Field extractors. None of them fail: missing data yields the field default.

pub mod contact;
pub mod education;
pub mod experience;
pub mod languages;
pub mod links;
pub mod sections;
pub mod seniority;
pub mod skills;

pub use contact::{extract_email, extract_name, extract_phone};
pub use education::extract_education;
pub use experience::{extract_experience, total_experience_months};
pub use languages::extract_languages;
pub use links::extract_links;
pub use seniority::extract_experience_profile;
pub use skills::{extract_major, extract_skills};
