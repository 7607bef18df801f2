// src/types/mod.rs
pub mod output;
pub mod resume;

pub use output::{OutputFormat, ResumeRenderer};
pub use resume::{
    ExperienceEntry, ExperienceLevel, ExperienceProfile, LanguageEntry, LinkGroups, ResumeInfo,
    POSITION_NOT_IDENTIFIED, UNKNOWN_LEVEL,
};
