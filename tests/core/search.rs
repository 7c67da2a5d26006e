// Integration tests for flattening and search behaviour

use crate::common::{builtin_services, example_catalog, kits_catalog, mixed_catalog, titles};
use resource_hub::core::search::{flatten, SearchIndex, DEFAULT_MAX_RESULTS};

#[test]
fn test_flatten_follows_declaration_order() {
    let services = builtin_services();
    let titles: Vec<&str> = services
        .index
        .entries()
        .iter()
        .map(|e| e.title.as_str())
        .collect();

    assert_eq!(
        titles,
        vec![
            "HIVST Basics — How it works",
            "HIVST Basics — When to use",
            "HIVST Basics — What's next after a reactive result?",
            "PrEP Guide — Who should consider PrEP?",
            "PrEP Guide — How to take PrEP",
            "PrEP Guide — Effectiveness & side effects",
            "PrEP Guide — Starting PrEP",
            "Myths & Facts — Myth: HIVST gives a final diagnosis.",
            "Myths & Facts — Myth: PrEP is only for certain groups.",
            "Myths & Facts — Myth: Testing positive means people will know.",
            "Find Services — Where to get HIVST kits",
            "Find Services — PrEP & confirmatory testing",
            "Ask an Expert — Q&A and Support",
        ]
    );
}

#[test]
fn test_flatten_sections_precede_faqs_within_topic() {
    let entries = flatten(&mixed_catalog());
    let basics: Vec<&str> = entries
        .iter()
        .filter(|e| e.topic_key == "hivst-basics")
        .map(|e| e.title.as_str())
        .collect();

    assert_eq!(
        basics,
        vec![
            "HIVST Basics — How it works",
            "HIVST Basics — When to use",
            "HIVST Basics — Is a reactive result final?",
        ]
    );
}

#[test]
fn test_flatten_is_deterministic() {
    let catalog = mixed_catalog();
    let first = flatten(&catalog);
    let second = flatten(&catalog);
    assert_eq!(first, second);
}

#[test]
fn test_every_substring_finds_its_entry() {
    let index = SearchIndex::build(&mixed_catalog());
    assert!(index.len() <= DEFAULT_MAX_RESULTS);

    for entry in index.entries() {
        let folded: Vec<char> = format!("{}{}", entry.title, entry.text)
            .to_lowercase()
            .chars()
            .collect();

        for len in [1, 4, 9, folded.len()] {
            for start in (0..=folded.len() - len).step_by(7) {
                let needle: String = folded[start..start + len].iter().collect();
                for query in [needle.clone(), needle.to_uppercase()] {
                    let hits = index.search(&query);
                    assert!(
                        hits.entries.iter().any(|e| *e == entry),
                        "query {query:?} did not return {:?}",
                        entry.title
                    );
                }
            }
        }
    }
}

#[test]
fn test_case_insensitive() {
    let services = builtin_services();
    let lower = services.index.search("prep");
    let mixed = services.index.search("PrEP");

    assert_eq!(lower, mixed);
    assert_eq!(
        titles(&lower),
        vec![
            "HIVST Basics — How it works", // "prepare the kit"
            "PrEP Guide — Who should consider PrEP?",
            "PrEP Guide — How to take PrEP",
            "PrEP Guide — Effectiveness & side effects",
            "PrEP Guide — Starting PrEP",
            "Myths & Facts — Myth: PrEP is only for certain groups.",
            "Find Services — PrEP & confirmatory testing",
        ]
    );
}

#[test]
fn test_no_match_is_empty() {
    let services = builtin_services();
    let hits = services.index.search("zzz_no_such_token");
    assert!(hits.is_empty());
    assert_eq!(hits.total_matches, 0);
}

#[test]
fn test_cap_keeps_first_eight_in_build_order() {
    let index = SearchIndex::build(&kits_catalog(10));
    let hits = index.search("kit");

    assert_eq!(hits.len(), 8);
    assert_eq!(hits.total_matches, 10);
    let expected: Vec<String> = (0..8).map(|i| format!("Kits — Kit {i}")).collect();
    assert_eq!(titles(&hits), expected);
}

#[test]
fn test_builtin_cap_reports_more_results() {
    let services = builtin_services();
    let hits = services.search("hiv");

    assert_eq!(hits.len(), 8);
    assert_eq!(hits.total_matches, 9);
    assert!(hits.is_truncated());
    // The ninth match is dropped silently from the list itself
    assert!(!titles(&hits).contains(&"Find Services — Where to get HIVST kits".to_string()));
}

#[test]
fn test_example_scenario() {
    let catalog = example_catalog();
    let entries = flatten(&catalog);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "HIVST Basics — How it works");
    assert_eq!(
        entries[0].text,
        "Oral fluid or finger-prick. Wait 15-20 minutes."
    );

    let index = SearchIndex::build(&catalog);
    assert_eq!(
        titles(&index.search("finger")),
        vec!["HIVST Basics — How it works"]
    );
    assert!(index.search("xyz").is_empty());
}

#[test]
fn test_search_never_fails() {
    let services = builtin_services();
    for query in ["", " ", "🙂", "\u{202e}", "((", "%", "日本語", "Ω"] {
        let hits = services.index.search(query);
        assert!(hits.len() <= DEFAULT_MAX_RESULTS);
    }
}
