//! Query tokenization and the AND-of-substrings matcher.
//!
//! The matcher is a pure, order-preserving filter over a catalog snapshot.
//! An empty query deliberately matches nothing: the tool shows results only
//! once the user has typed something.

use crate::record::CodeRecord;

/// Split a query into lower-cased keywords on runs of whitespace.
///
/// Empty and all-whitespace queries yield no tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect()
}

/// Filter `catalog` down to the records matching `query`, preserving order.
///
/// A record matches when every keyword is a case-insensitive substring of
/// its space-joined `code`/`name_ch`/`name_en` text. Keywords are not
/// boundary-aware: a keyword may match inside a word or across the space
/// between two fields. A query with no keywords returns no records.
pub fn search<'a>(catalog: &'a [CodeRecord], query: &str) -> Vec<&'a CodeRecord> {
    let keywords = tokenize(query);
    if keywords.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|record| {
            let haystack = record.searchable_text().to_lowercase();
            keywords.iter().all(|kw| haystack.contains(kw.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CodeRecord> {
        vec![
            CodeRecord {
                id: "A".to_string(),
                code: "73202E".to_string(),
                name_ch: "闌尾切除術".to_string(),
                name_en: "Appendectomy".to_string(),
            },
            CodeRecord {
                id: "B".to_string(),
                code: "71215C".to_string(),
                name_ch: "二氧化碳雷射手術".to_string(),
                name_en: "CO2 laser operation".to_string(),
            },
            CodeRecord {
                id: "C".to_string(),
                code: "73204C".to_string(),
                name_ch: "腹腔鏡闌尾切除術".to_string(),
                name_en: "Laparoscopic appendectomy".to_string(),
            },
        ]
    }

    #[test]
    fn test_tokenize_splits_on_whitespace_runs() {
        assert_eq!(tokenize("Foo  \t bar"), vec!["foo", "bar"]);
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let catalog = catalog();
        assert!(search(&catalog, "").is_empty());
        assert!(search(&catalog, "   ").is_empty());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let catalog = catalog();
        let results = search(&catalog, "append");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "A");
        assert_eq!(results[1].id, "C");
    }

    #[test]
    fn test_and_semantics_across_fields() {
        let catalog = catalog();
        // One keyword from the code, one from the English name.
        let results = search(&catalog, "73202 append");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "A");
    }

    #[test]
    fn test_missing_keyword_excludes_record() {
        let catalog = catalog();
        assert!(search(&catalog, "73202E laser").is_empty());
    }

    #[test]
    fn test_chinese_keyword() {
        let catalog = catalog();
        let results = search(&catalog, "闌尾");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_keyword_across_field_separator() {
        // The space between fields is itself searchable text.
        let catalog = catalog();
        let results = search(&catalog, "laser operation");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "B");
    }

    #[test]
    fn test_order_preserved() {
        let catalog = catalog();
        let results = search(&catalog, "切除");
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_idempotent() {
        let catalog = catalog();
        let first: Vec<String> = search(&catalog, "append")
            .iter()
            .map(|r| r.id.clone())
            .collect();
        let second: Vec<String> = search(&catalog, "append")
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_result_contains_every_keyword() {
        let catalog = catalog();
        let query = "c 2";
        for record in search(&catalog, query) {
            let haystack = record.searchable_text().to_lowercase();
            for kw in tokenize(query) {
                assert!(haystack.contains(&kw));
            }
        }
    }
}
