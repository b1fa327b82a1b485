//! Match highlighting: split a display field into plain and matched segments.
//!
//! Highlighting is cosmetic and independent of the matcher: it runs per
//! field, so a field may carry highlights even when a different field
//! supplied the keyword that made the record match.

use crate::query::tokenize;
use regex::RegexBuilder;

/// One run of characters in a highlighted field.
///
/// Concatenating the `text` of all segments in order reconstructs the
/// original field exactly, original casing included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Split `text` into alternating plain/matched segments for `query`.
///
/// Each query keyword is regex-escaped and the keywords are alternated into
/// one case-insensitive pattern, so metacharacters in the query are matched
/// literally. Adjacent keyword hits merge into a single matched segment.
/// A query with no usable keywords yields the whole text as one plain
/// segment: render as-is. This is independent of the matcher's
/// empty-query-means-no-results rule.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let keywords = tokenize(query);
    if keywords.is_empty() {
        return vec![Segment::plain(text)];
    }

    let pattern = keywords
        .iter()
        .map(|kw| regex::escape(kw))
        .collect::<Vec<_>>()
        .join("|");
    let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        // Escaped literals cannot produce an invalid pattern; if the regex
        // crate still refuses (e.g. size limit), degrade to no highlighting.
        Err(_) => return vec![Segment::plain(text)],
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for m in regex.find_iter(text) {
        if m.start() > cursor {
            segments.push(Segment::plain(&text[cursor..m.start()]));
        }
        match segments.last_mut() {
            // Adjacent hits coalesce so output stays strictly alternating.
            Some(last) if last.matched => last.text.push_str(m.as_str()),
            _ => segments.push(Segment::matched(m.as_str())),
        }
        cursor = m.end();
    }
    if cursor < text.len() {
        segments.push(Segment::plain(&text[cursor..]));
    }
    if segments.is_empty() {
        // Only possible for empty `text`.
        segments.push(Segment::plain(text));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_basic_highlight() {
        let segments = highlight("Appendectomy", "pend");
        assert_eq!(
            segments,
            vec![
                Segment::plain("Ap"),
                Segment::matched("pend"),
                Segment::plain("ectomy"),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_preserves_original_casing() {
        let segments = highlight("Appendectomy", "APPEND");
        assert_eq!(segments[0], Segment::matched("Append"));
        assert_eq!(segments[1], Segment::plain("ectomy"));
    }

    #[test]
    fn test_empty_query_single_plain_segment() {
        assert_eq!(
            highlight("Appendectomy", ""),
            vec![Segment::plain("Appendectomy")]
        );
        assert_eq!(
            highlight("Appendectomy", "  \t "),
            vec![Segment::plain("Appendectomy")]
        );
    }

    #[test]
    fn test_segments_reconstruct_text() {
        let text = "Laparoscopic appendectomy (self-paid)";
        for query in ["append", "a", "lap self", "(self-paid)", "zzz"] {
            assert_eq!(concat(&highlight(text, query)), text, "query {:?}", query);
        }
    }

    #[test]
    fn test_multiple_keywords_alternated() {
        let segments = highlight("CO2 laser operation", "co2 laser");
        assert_eq!(
            segments,
            vec![
                Segment::matched("CO2"),
                Segment::plain(" "),
                Segment::matched("laser"),
                Segment::plain(" operation"),
            ]
        );
    }

    #[test]
    fn test_adjacent_hits_merge() {
        let segments = highlight("aabb", "aa bb");
        assert_eq!(segments, vec![Segment::matched("aabb")]);
    }

    #[test]
    fn test_regex_metacharacters_matched_literally() {
        let segments = highlight("Repair (ventral) hernia", "(ventral)");
        assert_eq!(
            segments,
            vec![
                Segment::plain("Repair "),
                Segment::matched("(ventral)"),
                Segment::plain(" hernia"),
            ]
        );
        // A bare metacharacter must not blow up either.
        assert_eq!(concat(&highlight("a+b", "+")), "a+b");
    }

    #[test]
    fn test_multibyte_text() {
        let segments = highlight("腹腔鏡闌尾切除術", "闌尾");
        assert_eq!(
            segments,
            vec![
                Segment::plain("腹腔鏡"),
                Segment::matched("闌尾"),
                Segment::plain("切除術"),
            ]
        );
    }

    #[test]
    fn test_no_hit_single_plain_segment() {
        assert_eq!(
            highlight("Appendectomy", "laser"),
            vec![Segment::plain("Appendectomy")]
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(highlight("", "foo"), vec![Segment::plain("")]);
    }
}
