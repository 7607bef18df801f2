// src/extract/experience.rs
//! Experience section segmentation.
//!
//! One forward pass: an Experience heading switches collection on, the first
//! blank line after content or the next section heading switches it off. The
//! collected lines are then cut into entries on date ranges and on
//! `Title at Company` lines; everything else becomes description.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::sections::{inline_heading, is_heading, section_heading, Section};
use crate::types::ExperienceEntry;
use crate::utils::normalize_whitespace;

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?";

static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    let month_year = format!(r"(?:{MONTH}\s+\d{{4}}|\d{{1,2}}/\d{{4}})");
    Regex::new(&format!(
        r"(?i)\b({month_year})\s*(?:-|–|—|to|until)\s*({month_year}|present|current|now|today)\b"
    ))
    .expect("valid date range pattern")
});

static MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(?:({MONTH})\s+(\d{{4}})|(\d{{1,2}})/(\d{{4}}))$"))
        .expect("valid month/year pattern")
});

static TITLE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+at\s+").expect("valid title separator pattern"));

/// Title and company lines are short; longer lines with "at" are prose.
const MAX_TITLE_WORDS: usize = 6;

const OPEN_ENDED: &[&str] = &["present", "current", "now", "today"];

pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let block = experience_block(text);
    debug!("Experience block has {} lines", block.len());
    segment_entries(&block)
}

/// Lines of the first Experience section, up to a blank line or the next heading.
/// Content on the heading line itself (`Experience: ...`) is included.
pub fn experience_block(text: &str) -> Vec<&str> {
    let mut collecting = false;
    let mut lines = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if !collecting {
            if section_heading(trimmed) == Some(Section::Experience) {
                collecting = true;
            } else if let Some((Section::Experience, rest)) = inline_heading(trimmed) {
                collecting = true;
                lines.push(rest);
            }
            continue;
        }

        if trimmed.is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }
        if is_heading(trimmed) || inline_heading(trimmed).is_some() {
            break;
        }
        lines.push(trimmed);
    }

    lines
}

#[derive(Default)]
struct PendingEntry {
    entry: ExperienceEntry,
    description: Vec<String>,
}

impl PendingEntry {
    fn has_dates(&self) -> bool {
        self.entry.start_date.is_some()
    }

    fn has_title(&self) -> bool {
        self.entry.job_title.is_some() || self.entry.company.is_some()
    }

    fn finish(mut self) -> Option<ExperienceEntry> {
        if !self.description.is_empty() {
            self.entry.description = Some(self.description.join(" "));
        }
        if self.entry.is_empty() {
            None
        } else {
            Some(self.entry)
        }
    }
}

/// Split collected lines into entries
pub fn segment_entries(lines: &[&str]) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut current = PendingEntry::default();

    for raw in lines {
        let line = strip_bullet(raw);
        let bulleted = line.len() < raw.trim().len();
        let mut rest = line.to_string();

        if let Some((start, end, range)) = find_date_range(line) {
            if current.has_dates() {
                entries.extend(std::mem::take(&mut current).finish());
            }
            current.entry.start_date = Some(start);
            current.entry.end_date = Some(end);
            rest = remove_span(line, range);
        }

        if rest.is_empty() {
            continue;
        }

        // bullets are always description, even "Presented at ..."
        if bulleted {
            current.description.push(rest);
            continue;
        }

        if let Some((title, company)) = split_title_company(&rest) {
            if current.has_title() {
                entries.extend(std::mem::take(&mut current).finish());
            }
            current.entry.job_title = Some(title);
            current.entry.company = Some(company);
            continue;
        }

        current.description.push(rest);
    }

    entries.extend(current.finish());
    entries
}

/// Start text, end text and byte range of the first date range in `line`
fn find_date_range(line: &str) -> Option<(String, String, std::ops::Range<usize>)> {
    let caps = DATE_RANGE.captures(line)?;
    let whole = caps.get(0)?;
    let start = normalize_whitespace(caps.get(1)?.as_str());
    let end = normalize_whitespace(caps.get(2)?.as_str());
    Some((start, end, whole.range()))
}

/// Remove a span and the separators left dangling around it
fn remove_span(line: &str, range: std::ops::Range<usize>) -> String {
    let is_separator = |c: char| c.is_whitespace() || "|,-–—()[]".contains(c);
    let before = line[..range.start].trim_end_matches(is_separator);
    let after = line[range.end..].trim_start_matches(is_separator);

    match (before.is_empty(), after.is_empty()) {
        (true, _) => after.to_string(),
        (false, true) => before.to_string(),
        (false, false) => format!("{} {}", before, after),
    }
}

/// `Title at Company` split on the first standalone "at"
pub fn split_title_company(line: &str) -> Option<(String, String)> {
    let separator = TITLE_SEPARATOR.find(line)?;
    let title = line[..separator.start()].trim();
    let company = line[separator.end()..]
        .trim()
        .trim_end_matches(|c: char| c == ',' || c == '|' || c == '.')
        .trim();

    if title.is_empty() || company.is_empty() {
        return None;
    }
    // "Looking at options": companies are names
    if !company.starts_with(|c: char| c.is_uppercase() || c.is_ascii_digit()) {
        return None;
    }
    if title.split_whitespace().count() > MAX_TITLE_WORDS
        || company.split_whitespace().count() > MAX_TITLE_WORDS
    {
        return None;
    }

    Some((title.to_string(), company.to_string()))
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| matches!(c, '•' | '▪' | '◦' | '·' | '*' | '-' | '–' | '●'))
        .trim()
}

/// Parse `Jan 2020`, `September 2019` or `03/2021` into the first day of that month
pub fn parse_month_year(text: &str) -> Option<NaiveDate> {
    let caps = MONTH_YEAR.captures(text.trim())?;

    let (month, year) = match (caps.get(1), caps.get(2), caps.get(3), caps.get(4)) {
        (Some(name), Some(year), _, _) => (month_number(name.as_str())?, year.as_str()),
        (_, _, Some(month), Some(year)) => (month.as_str().parse().ok()?, year.as_str()),
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.to_lowercase().chars().take(3).collect();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

/// Months covered by the entries, counting overlapping periods once.
/// Open ended or missing end dates run until `today`. `None` when no entry
/// has a parseable start date.
pub fn total_experience_months(entries: &[ExperienceEntry], today: NaiveDate) -> Option<u32> {
    let mut spans: Vec<(i32, i32)> = entries
        .iter()
        .filter_map(|entry| {
            let start = parse_month_year(entry.start_date.as_deref()?)?;
            let end = match entry.end_date.as_deref() {
                Some(end) if OPEN_ENDED.contains(&end.trim().to_lowercase().as_str()) => today,
                Some(end) => parse_month_year(end)?,
                None => today,
            };
            (end >= start).then(|| (month_index(start), month_index(end)))
        })
        .collect();

    if spans.is_empty() {
        return None;
    }

    spans.sort_unstable();
    let mut total = 0;
    let (mut span_start, mut span_end) = spans[0];
    for &(start, end) in &spans[1..] {
        if start <= span_end + 1 {
            span_end = span_end.max(end);
        } else {
            total += span_end - span_start + 1;
            span_start = start;
            span_end = end;
        }
    }
    total += span_end - span_start + 1;

    Some(total as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_block_without_dates_is_single_description_entry() {
        let text = "Experience\nWorked on internal tools\nImproved build times\n";
        let entries = extract_experience(text);

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].description.as_deref(),
            Some("Worked on internal tools Improved build times")
        );
        assert!(entries[0].start_date.is_none());
        assert!(entries[0].end_date.is_none());
        assert!(entries[0].job_title.is_none());
        assert!(entries[0].company.is_none());
    }

    #[test]
    fn test_title_first_layout() {
        let text = "Jane Doe\n\nWORK EXPERIENCE\n\
                    Software Engineer at Acme Corp\n\
                    Jan 2020 - Present\n\
                    • Built billing APIs\n\
                    Data Analyst at Beta Labs\n\
                    Mar 2018 – Dec 2019\n\
                    • Analyzed churn\n\
                    \n\
                    Education\nStanford University\n";
        let entries = extract_experience(text);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].job_title.as_deref(), Some("Software Engineer"));
        assert_eq!(entries[0].company.as_deref(), Some("Acme Corp"));
        assert_eq!(entries[0].start_date.as_deref(), Some("Jan 2020"));
        assert_eq!(entries[0].end_date.as_deref(), Some("Present"));
        assert_eq!(entries[0].description.as_deref(), Some("Built billing APIs"));
        assert_eq!(entries[1].job_title.as_deref(), Some("Data Analyst"));
        assert_eq!(entries[1].start_date.as_deref(), Some("Mar 2018"));
        assert_eq!(entries[1].end_date.as_deref(), Some("Dec 2019"));
    }

    #[test]
    fn test_dates_first_layout_and_inline_dates() {
        let lines = [
            "01/2021 - 06/2022",
            "Backend Developer at Gamma",
            "Maintained services",
            "Intern at Delta | June 2020 to August 2020",
        ];
        let entries = segment_entries(&lines);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].start_date.as_deref(), Some("01/2021"));
        assert_eq!(entries[0].end_date.as_deref(), Some("06/2022"));
        assert_eq!(entries[0].company.as_deref(), Some("Gamma"));
        assert_eq!(entries[0].description.as_deref(), Some("Maintained services"));
        assert_eq!(entries[1].job_title.as_deref(), Some("Intern"));
        assert_eq!(entries[1].company.as_deref(), Some("Delta"));
        assert_eq!(entries[1].start_date.as_deref(), Some("June 2020"));
    }

    #[test]
    fn test_bulleted_line_with_at_stays_in_description() {
        let text = "Experience\n\
                    Software Engineer at Acme Corp\n\
                    Jan 2020 - Present\n\
                    • Presented at Tech Summit\n\
                    • Built billing APIs\n";
        let entries = extract_experience(text);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job_title.as_deref(), Some("Software Engineer"));
        assert_eq!(
            entries[0].description.as_deref(),
            Some("Presented at Tech Summit Built billing APIs")
        );
    }

    #[test]
    fn test_inline_experience_heading() {
        let text = "Experience: Software Engineer at Acme Corp\nJan 2020 - Present\nSkills: Rust\n";
        assert_eq!(
            experience_block(text),
            vec!["Software Engineer at Acme Corp", "Jan 2020 - Present"]
        );

        let entries = extract_experience(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company.as_deref(), Some("Acme Corp"));
        assert_eq!(entries[0].start_date.as_deref(), Some("Jan 2020"));
    }

    #[test]
    fn test_collection_stops_at_next_heading() {
        let text = "Experience\nTeacher at School\nSkills\nPython\n";
        assert_eq!(experience_block(text), vec!["Teacher at School"]);
    }

    #[test]
    fn test_collection_stops_at_blank_line_after_content() {
        let text = "Experience\n\nFirst line\n\nSecond block\n";
        assert_eq!(experience_block(text), vec!["First line"]);
    }

    #[test]
    fn test_no_heading_means_no_entries() {
        assert!(extract_experience("Software Engineer at Acme\nJan 2020 - Present\n").is_empty());
    }

    #[test]
    fn test_long_prose_with_at_is_description() {
        assert!(split_title_company(
            "Presented quarterly results to the executive board at the annual planning offsite in Berlin"
        )
        .is_none());
        assert_eq!(
            split_title_company("QA Engineer at Initech,"),
            Some(("QA Engineer".to_string(), "Initech".to_string()))
        );
        assert!(split_title_company("Looking at options").is_none());
        assert!(split_title_company("Presented at internal conferences").is_none());
        assert!(split_title_company("at Initech").is_none());
    }

    #[test]
    fn test_parse_month_year() {
        assert_eq!(parse_month_year("Jan 2020"), Some(ymd(2020, 1, 1)));
        assert_eq!(parse_month_year("Sept. 2019"), Some(ymd(2019, 9, 1)));
        assert_eq!(parse_month_year("december 2018"), Some(ymd(2018, 12, 1)));
        assert_eq!(parse_month_year("03/2021"), Some(ymd(2021, 3, 1)));
        assert_eq!(parse_month_year("13/2021"), None);
        assert_eq!(parse_month_year("Present"), None);
    }

    #[test]
    fn test_total_experience_months_merges_overlaps() {
        let entry = |start: &str, end: Option<&str>| ExperienceEntry {
            start_date: Some(start.to_string()),
            end_date: end.map(str::to_string),
            ..Default::default()
        };
        let today = ymd(2024, 6, 15);

        let entries = vec![
            entry("Jan 2020", Some("Dec 2020")),
            entry("Jun 2020", Some("Mar 2021")),
            entry("Jan 2024", Some("Present")),
        ];
        // Jan 2020..Mar 2021 = 15, Jan 2024..Jun 2024 = 6
        assert_eq!(total_experience_months(&entries, today), Some(21));

        assert_eq!(
            total_experience_months(&[entry("Jan 2020", Some("Jan 2020"))], today),
            Some(1)
        );
        assert_eq!(total_experience_months(&[ExperienceEntry::default()], today), None);
        assert_eq!(
            total_experience_months(&[entry("Jan 2022", Some("Jan 2021"))], today),
            None
        );
    }
}
