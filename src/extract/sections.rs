// src/extract/sections.rs
//! Section heading detection shared by the line scanners

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Experience,
    Education,
    Skills,
    Languages,
    Projects,
    Certifications,
    Summary,
    Interests,
    References,
    Awards,
    Publications,
    Volunteering,
    Contact,
}

const HEADINGS: &[(&str, Section)] = &[
    ("experience", Section::Experience),
    ("experiences", Section::Experience),
    ("work experience", Section::Experience),
    ("professional experience", Section::Experience),
    ("relevant experience", Section::Experience),
    ("employment", Section::Experience),
    ("employment history", Section::Experience),
    ("work history", Section::Experience),
    ("career history", Section::Experience),
    ("education", Section::Education),
    ("academic background", Section::Education),
    ("education and training", Section::Education),
    ("qualifications", Section::Education),
    ("skills", Section::Skills),
    ("technical skills", Section::Skills),
    ("key skills", Section::Skills),
    ("core competencies", Section::Skills),
    ("competencies", Section::Skills),
    ("languages", Section::Languages),
    ("language", Section::Languages),
    ("language skills", Section::Languages),
    ("projects", Section::Projects),
    ("personal projects", Section::Projects),
    ("academic projects", Section::Projects),
    ("certifications", Section::Certifications),
    ("certificates", Section::Certifications),
    ("licenses & certifications", Section::Certifications),
    ("licenses and certifications", Section::Certifications),
    ("courses", Section::Certifications),
    ("summary", Section::Summary),
    ("professional summary", Section::Summary),
    ("profile", Section::Summary),
    ("objective", Section::Summary),
    ("career objective", Section::Summary),
    ("about", Section::Summary),
    ("about me", Section::Summary),
    ("interests", Section::Interests),
    ("hobbies", Section::Interests),
    ("hobbies and interests", Section::Interests),
    ("hobbies & interests", Section::Interests),
    ("references", Section::References),
    ("awards", Section::Awards),
    ("honors", Section::Awards),
    ("honours", Section::Awards),
    ("achievements", Section::Awards),
    ("awards and honors", Section::Awards),
    ("publications", Section::Publications),
    ("volunteering", Section::Volunteering),
    ("volunteer experience", Section::Volunteering),
    ("volunteer work", Section::Volunteering),
    ("contact", Section::Contact),
    ("contact information", Section::Contact),
    ("personal information", Section::Contact),
    ("personal details", Section::Contact),
];

/// The section a line introduces, if the whole line is a known heading.
/// Case, surrounding bullets and a trailing colon are ignored.
pub fn section_heading(line: &str) -> Option<Section> {
    let normalized = normalize_heading(line);
    if normalized.is_empty() {
        return None;
    }

    HEADINGS
        .iter()
        .find(|(heading, _)| *heading == normalized)
        .map(|(_, section)| *section)
}

/// A heading followed by content on the same line, e.g. `Languages: English, French`.
/// Returns the section and the content after the colon.
pub fn inline_heading(line: &str) -> Option<(Section, &str)> {
    let (head, rest) = line.split_once(':')?;
    let rest = rest.trim();
    if rest.is_empty() {
        return None;
    }
    section_heading(head).map(|section| (section, rest))
}

pub fn is_heading(line: &str) -> bool {
    section_heading(line).is_some()
}

/// The section each line of `text` falls in, indexed like `text.split('\n')`.
/// A heading line, inline or not, belongs to the section it opens.
pub fn line_sections(text: &str) -> Vec<Option<Section>> {
    let mut current = None;

    text.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if let Some(section) = section_heading(trimmed) {
                current = Some(section);
            } else if let Some((section, _)) = inline_heading(trimmed) {
                current = Some(section);
            }
            current
        })
        .collect()
}

fn normalize_heading(line: &str) -> String {
    let trimmed = line
        .trim()
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end()
        .trim_end_matches(':')
        .trim_end();

    crate::utils::normalize_whitespace(&trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_heading_variants() {
        assert_eq!(section_heading("Experience"), Some(Section::Experience));
        assert_eq!(section_heading("WORK  EXPERIENCE:"), Some(Section::Experience));
        assert_eq!(section_heading("  ■ Languages "), Some(Section::Languages));
        assert_eq!(
            section_heading("Volunteer Experience"),
            Some(Section::Volunteering)
        );
    }

    #[test]
    fn test_section_heading_rejects_content_lines() {
        assert_eq!(section_heading("Experience with Rust and Go"), None);
        assert_eq!(section_heading(""), None);
        assert_eq!(section_heading(" : "), None);
    }

    #[test]
    fn test_inline_heading() {
        assert_eq!(
            inline_heading("Languages: English, French"),
            Some((Section::Languages, "English, French"))
        );
        assert_eq!(inline_heading("Languages:"), None);
        assert_eq!(inline_heading("Note: English spoken"), None);
    }

    #[test]
    fn test_line_sections() {
        let sections = line_sections("Jane Doe\nSkills\nRust, Go\nExperience: Acme\nLed a team\n");
        assert_eq!(
            sections,
            vec![
                None,
                Some(Section::Skills),
                Some(Section::Skills),
                Some(Section::Experience),
                Some(Section::Experience),
                Some(Section::Experience),
            ]
        );
    }
}
