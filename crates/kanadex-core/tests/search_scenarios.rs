//! Integration tests driving the whole engine through the public API:
//! cross-script matching, tier ordering, AND search and limits.
#![allow(clippy::uninlined_format_args)]

use kanadex_core::{Index, IndexConfig};

fn index_with(docs: &[(&str, &[&str])]) -> Index {
    let mut index = Index::new();
    for (name, aliases) in docs {
        index.add_document(name, aliases.iter().map(ToString::to_string).collect());
    }
    index
}

// =============================================================================
// SCENARIO 1: Cross-script lookup
// =============================================================================
// One document, reachable from romaji, hiragana and katakana queries.

mod cross_script_lookup {
    use super::*;

    #[test]
    fn test_romaji_query_hits_hiragana_alias() {
        let mut index = index_with(&[("富士山", &["ふじさん", "フジヤマ"])]);

        assert_eq!(index.search("fujisan", None), vec!["富士山"]);
    }

    #[test]
    fn test_romaji_query_hits_katakana_alias() {
        let mut index = index_with(&[("富士山", &["ふじさん", "フジヤマ"])]);

        assert_eq!(index.search("fujiyama", None), vec!["富士山"]);
    }

    #[test]
    fn test_katakana_query_hits_hiragana_alias() {
        let mut index = index_with(&[("富士山", &["ふじさん"])]);

        assert_eq!(index.search("フジサン", None), vec!["富士山"]);
    }

    #[test]
    fn test_uppercase_romaji_query() {
        let mut index = index_with(&[("富士山", &["ふじさん"])]);

        assert_eq!(index.search("FujiSan", None), vec!["富士山"]);
    }

    #[test]
    fn test_ascii_name_reachable_from_kana_query() {
        // ASCII names are also indexed under their hiragana reading.
        let mut index = index_with(&[("sakura", &[])]);

        assert_eq!(index.search("さくら", None), vec!["sakura"]);
    }
}

// =============================================================================
// SCENARIO 2: Tier ordering
// =============================================================================
// Six documents, one per tier, for the query "ka".

mod tier_ordering {
    use super::*;

    fn tier_fixture() -> Index {
        index_with(&[
            ("ka", &[]),           // tier 1: exact name
            ("kana", &["ka"]),     // tier 2: exact alias beats name prefix
            ("kart", &[]),         // tier 3: name prefix
            ("zz1", &["kaboom"]),  // tier 4: alias prefix
            ("deka", &[]),         // tier 5: name substring
            ("zz2", &["mika"]),    // tier 6: alias substring
        ])
    }

    #[test]
    fn test_results_ordered_by_tier() {
        let mut index = tier_fixture();

        let hits = index.search_no_limit("ka");

        assert_eq!(hits, vec!["ka", "kana", "kart", "zz1", "deka", "zz2"]);
    }

    #[test]
    fn test_limit_cuts_lower_tiers_first() {
        let mut index = tier_fixture();

        let hits = index.search_with_limit("ka", 3);

        assert_eq!(hits, vec!["ka", "kana", "kart"]);
    }

    #[test]
    fn test_within_tier_insertion_order() {
        let mut index = index_with(&[("kart", &[]), ("kaleidoscope", &[]), ("kayak", &[])]);

        let hits = index.search("ka", None);

        assert_eq!(hits, vec!["kart", "kaleidoscope", "kayak"]);
    }
}

// =============================================================================
// SCENARIO 3: AND search
// =============================================================================

mod and_search {
    use super::*;

    #[test]
    fn test_all_keywords_must_match() {
        let mut index = index_with(&[
            ("smile", &["happy", "face"]),
            ("sun", &["happy", "warm"]),
            ("moon", &["face"]),
        ]);

        assert_eq!(index.search("happy face", None), vec!["smile"]);
    }

    #[test]
    fn test_keywords_normalize_independently() {
        let mut index = index_with(&[("笑顔", &["えがお", "かわいい"])]);

        assert_eq!(index.search("egao kawaii", None), vec!["笑顔"]);
    }

    #[test]
    fn test_no_common_document_yields_nothing() {
        let mut index = index_with(&[("smile", &["happy"]), ("moon", &["face"])]);

        assert!(index.search("happy face", None).is_empty());
    }
}

// =============================================================================
// SCENARIO 4: Mutation visibility
// =============================================================================
// Every mutation is observable by the next search, no rebuild step.

mod mutation_visibility {
    use super::*;

    #[test]
    fn test_added_document_is_searchable_immediately() {
        let mut index = Index::new();
        assert!(index.search("neko", None).is_empty());

        index.add_document("猫", vec!["ねこ".to_string()]);

        assert_eq!(index.search("neko", None), vec!["猫"]);
    }

    #[test]
    fn test_removed_document_disappears_immediately() {
        let mut index = index_with(&[("猫", &["ねこ"]), ("犬", &["いぬ"])]);

        assert!(index.remove_document("猫"));

        assert!(index.search("neko", None).is_empty());
        assert_eq!(index.search("inu", None), vec!["犬"]);
    }

    #[test]
    fn test_update_swaps_alias_visibility() {
        let mut index = index_with(&[("猫", &["ねこ"])]);

        assert!(index.update_document("猫", vec!["にゃんこ".to_string()]));

        assert!(index.search("neko", None).is_empty());
        assert_eq!(index.search("nyanko", None), vec!["猫"]);
    }

    #[test]
    fn test_overwrite_keeps_single_result() {
        let mut index = index_with(&[("猫", &["ねこ"])]);

        index.add_document("猫", vec!["ねこ".to_string(), "キャット".to_string()]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.search("ねこ", None), vec!["猫"]);
    }
}

// =============================================================================
// SCENARIO 5: Limits and configuration
// =============================================================================

mod limits {
    use super::*;

    #[test]
    fn test_default_limit_comes_from_config() {
        let mut config = IndexConfig::default();
        config.search.default_limit = 2;
        let mut index = Index::with_config(config);
        for i in 0..6 {
            index.add_document(&format!("card{i}"), vec![]);
        }

        assert_eq!(index.search("card", None).len(), 2);
    }

    #[test]
    fn test_no_limit_returns_every_match() {
        let mut index = Index::new();
        for i in 0..25 {
            index.add_document(&format!("card{i}"), vec![]);
        }

        assert_eq!(index.search_no_limit("card").len(), 25);
    }

    #[test]
    fn test_zero_limit_is_empty() {
        let mut index = index_with(&[("card", &[])]);

        assert!(index.search_with_limit("card", 0).is_empty());
    }
}
