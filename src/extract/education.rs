// src/extract/education.rs
use crate::nlp::lexicon::EDUCATION_MARKERS;
use crate::nlp::{AnnotatedText, EntityLabel};
use crate::utils::dedup_preserving_order;

/// Organisations that look like universities, colleges or institutes
pub fn extract_education(doc: &AnnotatedText) -> Vec<String> {
    let institutions = doc
        .entities(EntityLabel::Org)
        .filter(|entity| {
            let lower = entity.text.to_lowercase();
            EDUCATION_MARKERS.iter().any(|marker| lower.contains(marker))
        })
        .map(|entity| entity.text.clone())
        .collect();

    dedup_preserving_order(institutions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{Annotator, RuleAnnotator};

    #[test]
    fn test_education_keeps_institutions_only() {
        let doc = RuleAnnotator::new().annotate(
            "Education\nMSc Data Science, Cairo University\nBSc, Cairo University\n\
             Experience\nAnalyst at Acme Corp\nMassachusetts Institute of Technology\n",
        );
        assert_eq!(
            extract_education(&doc),
            vec!["Cairo University", "Massachusetts Institute of Technology"]
        );
    }

    #[test]
    fn test_education_empty() {
        let doc = RuleAnnotator::new().annotate("Worked at Acme Corp\n");
        assert!(extract_education(&doc).is_empty());
    }
}
