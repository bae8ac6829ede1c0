// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::store::AssetCatalog;
use atlas_core::{AssetMetadata, AssetType};

// --- HELPERS ---

fn meta(name: &str, asset_type: AssetType, keywords: &[&str]) -> AssetMetadata {
    AssetMetadata::new(
        name,
        format!("Assets/{name}"),
        asset_type,
        keywords.iter().map(|k| k.to_string()).collect(),
        "Game Assets",
        1,
    )
}

fn names(catalog: &AssetCatalog, ids: &[atlas_core::AssetId]) -> Vec<String> {
    ids.iter()
        .map(|id| {
            catalog
                .get(*id)
                .expect("query returned a stale id")
                .metadata()
                .name
                .clone()
        })
        .collect()
}

/// Seeds the three-asset fixture used throughout the original system's demo.
fn seeded_catalog() -> AssetCatalog {
    let mut catalog = AssetCatalog::new();
    catalog.insert(meta("Texture1", AssetType::Texture, &["background", "game"]));
    catalog.insert(meta("Audio1", AssetType::Audio, &["background", "game"]));
    catalog.insert(meta("Model1", AssetType::Model, &["3d", "game"]));
    catalog
}

// --- TESTS ---

#[test]
fn test_insert_returns_resolvable_handle() {
    // --- 1. SETUP ---
    let mut catalog = AssetCatalog::new();

    // --- 2. ACTION ---
    let id = catalog.insert(meta("Texture1", AssetType::Texture, &["game"]));

    // --- 3. ASSERTIONS ---
    assert_eq!(id.index, 0, "The first record should occupy slot 0");
    assert_eq!(id.generation, 0, "A fresh slot starts at generation 0");

    let record = catalog.get(id).expect("the handle should resolve");
    assert_eq!(record.metadata().name, "Texture1");
    assert_eq!(record.metadata().asset_type, AssetType::Texture);
    assert!(record.relations().is_empty(), "New records have no relations");
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_find_by_type_preserves_insertion_order() {
    let catalog = seeded_catalog();

    let textures = catalog.find_by_type(AssetType::Texture);
    assert_eq!(names(&catalog, &textures), vec!["Texture1"]);

    // A second texture lands after the first, regardless of other types
    // inserted in between.
    let mut catalog = catalog;
    catalog.insert(meta("Texture2", AssetType::Texture, &[]));
    let textures = catalog.find_by_type(AssetType::Texture);
    assert_eq!(names(&catalog, &textures), vec!["Texture1", "Texture2"]);
}

#[test]
fn test_find_by_keyword_returns_bucket_in_insertion_order() {
    let catalog = seeded_catalog();

    let game = catalog.find_by_keyword("game");
    assert_eq!(
        names(&catalog, &game),
        vec!["Texture1", "Audio1", "Model1"],
        "Bucket order must follow insertion order"
    );
    assert!(
        catalog.find_by_keyword("nonexistent").is_empty(),
        "Unknown keywords yield an empty result, not an error"
    );
}

#[test]
fn test_remove_purges_keyword_index() {
    // --- 1. SETUP ---
    let mut catalog = seeded_catalog();

    // --- 2. ACTION ---
    catalog.remove("Audio1");

    // --- 3. ASSERTIONS ---
    assert!(catalog.find_by_name("Audio1").is_none());
    assert_eq!(catalog.len(), 2);

    // No bucket may still reference the removed record.
    let background = catalog.find_by_keyword("background");
    assert_eq!(names(&catalog, &background), vec!["Texture1"]);
    let game = catalog.find_by_keyword("game");
    assert_eq!(names(&catalog, &game), vec!["Texture1", "Model1"]);
}

#[test]
fn test_remove_is_idempotent() {
    let mut catalog = seeded_catalog();

    catalog.remove("Model1");
    let after_first: Vec<String> = catalog.iter().map(|(_, r)| r.metadata().name.clone()).collect();

    // Removing again must be a silent no-op.
    catalog.remove("Model1");
    let after_second: Vec<String> = catalog.iter().map(|(_, r)| r.metadata().name.clone()).collect();

    assert_eq!(after_first, after_second);
    assert_eq!(catalog.len(), 2);

    // So must removing a name that never existed.
    catalog.remove("NeverInserted");
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_slot_reuse_bumps_generation_and_invalidates_stale_handles() {
    // --- 1. SETUP ---
    let mut catalog = AssetCatalog::new();
    let old_id = catalog.insert(meta("Texture1", AssetType::Texture, &["game"]));

    // --- 2. ACTION ---
    catalog.remove("Texture1");
    let new_id = catalog.insert(meta("Audio1", AssetType::Audio, &["game"]));

    // --- 3. ASSERTIONS ---
    assert_eq!(new_id.index, old_id.index, "The freed slot should be recycled");
    assert_eq!(
        new_id.generation,
        old_id.generation + 1,
        "Recycling must bump the generation"
    );
    assert!(
        catalog.get(old_id).is_none(),
        "The stale handle must not alias the new record"
    );
    assert_eq!(catalog.get(new_id).unwrap().metadata().name, "Audio1");
}

#[test]
fn test_relation_traversal_skips_removed_targets() {
    // --- 1. SETUP ---
    let mut catalog = AssetCatalog::new();
    let a = catalog.insert(meta("Texture1", AssetType::Texture, &[]));
    let b = catalog.insert(meta("Audio1", AssetType::Audio, &[]));
    catalog.add_relation(a, b);
    assert_eq!(names(&catalog, &catalog.related_of("Texture1")), vec!["Audio1"]);

    // --- 2. ACTION ---
    catalog.remove("Audio1");

    // --- 3. ASSERTIONS ---
    assert!(
        catalog.related_of("Texture1").is_empty(),
        "A removed target must be treated as absent, not surfaced"
    );
    // The raw list still carries the stale handle; only traversal filters.
    assert_eq!(catalog.get(a).unwrap().relations(), &[b]);
}

#[test]
fn test_relations_permit_duplicates_and_cycles() {
    let mut catalog = AssetCatalog::new();
    let a = catalog.insert(meta("Texture1", AssetType::Texture, &[]));
    let b = catalog.insert(meta("Model1", AssetType::Model, &[]));

    catalog.add_relation(a, b);
    catalog.add_relation(a, b);
    catalog.add_relation(b, a);
    catalog.add_relation(a, a);

    assert_eq!(
        names(&catalog, &catalog.related_of("Texture1")),
        vec!["Model1", "Model1", "Texture1"]
    );
    assert_eq!(names(&catalog, &catalog.related_of("Model1")), vec!["Texture1"]);
}

#[test]
fn test_add_relation_from_stale_handle_is_a_no_op() {
    let mut catalog = AssetCatalog::new();
    let a = catalog.insert(meta("Texture1", AssetType::Texture, &[]));
    let b = catalog.insert(meta("Audio1", AssetType::Audio, &[]));

    catalog.remove("Texture1");
    catalog.add_relation(a, b);

    // Recycle the slot and verify the new occupant was not touched.
    let c = catalog.insert(meta("Model1", AssetType::Model, &[]));
    assert_eq!(c.index, a.index);
    assert!(catalog.get(c).unwrap().relations().is_empty());
}

#[test]
fn test_related_of_unknown_name_is_empty() {
    let catalog = seeded_catalog();
    assert!(catalog.related_of("NeverInserted").is_empty());
}

#[test]
fn test_duplicate_names_coexist_and_remove_takes_the_first() {
    // --- 1. SETUP ---
    // Duplicate names are accepted baseline behaviour; name-based
    // operations act on the first record in insertion order.
    let mut catalog = AssetCatalog::new();
    let first = catalog.insert(meta("Texture1", AssetType::Texture, &["old"]));
    let second = catalog.insert(meta("Texture1", AssetType::Texture, &["new"]));

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.find_by_name("Texture1"), Some(first));

    // --- 2. ACTION ---
    catalog.remove("Texture1");

    // --- 3. ASSERTIONS ---
    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.find_by_name("Texture1"),
        Some(second),
        "Only the first duplicate is removed"
    );
    assert!(catalog.find_by_keyword("old").is_empty());
    assert_eq!(catalog.find_by_keyword("new"), vec![second]);
}

#[test]
fn test_index_stays_consistent_across_mixed_mutations() {
    // Runs a mixed insert/remove sequence and re-checks the core invariant
    // after every step: a record's id sits in a keyword's bucket exactly
    // when the record is live and carries that keyword.
    fn check_invariant(catalog: &AssetCatalog, keywords: &[&str]) {
        for keyword in keywords {
            let indexed = catalog.find_by_keyword(keyword);
            for id in &indexed {
                let record = catalog.get(*id).expect("bucket entry must be live");
                assert!(
                    record.metadata().keywords.iter().any(|k| k == keyword),
                    "record '{}' indexed under keyword it does not carry",
                    record.metadata().name
                );
            }
            for (id, record) in catalog.iter() {
                let carries = record.metadata().keywords.iter().any(|k| k == keyword);
                assert_eq!(
                    carries,
                    indexed.contains(&id),
                    "index out of sync for keyword '{keyword}' and record '{}'",
                    record.metadata().name
                );
            }
        }
    }

    let all_keywords = ["background", "game", "3d", "ui"];
    let mut catalog = AssetCatalog::new();

    catalog.insert(meta("Texture1", AssetType::Texture, &["background", "game"]));
    check_invariant(&catalog, &all_keywords);

    catalog.insert(meta("Audio1", AssetType::Audio, &["background", "game"]));
    check_invariant(&catalog, &all_keywords);

    catalog.insert(meta("Model1", AssetType::Model, &["3d", "game"]));
    check_invariant(&catalog, &all_keywords);

    catalog.remove("Audio1");
    check_invariant(&catalog, &all_keywords);

    catalog.insert(meta("Texture2", AssetType::Texture, &["ui", "game"]));
    check_invariant(&catalog, &all_keywords);

    catalog.remove("Texture1");
    check_invariant(&catalog, &all_keywords);

    catalog.remove("Texture1");
    check_invariant(&catalog, &all_keywords);
}

#[test]
fn test_demo_scenario() {
    // The end-to-end walk from the original system's demo: seed three
    // assets, query by type and keyword, remove one, re-query.
    let mut catalog = seeded_catalog();

    let textures = catalog.find_by_type(AssetType::Texture);
    assert_eq!(names(&catalog, &textures), vec!["Texture1"]);

    let game = catalog.find_by_keyword("game");
    assert_eq!(names(&catalog, &game), vec!["Texture1", "Audio1", "Model1"]);

    catalog.remove("Audio1");

    let background = catalog.find_by_keyword("background");
    assert_eq!(names(&catalog, &background), vec!["Texture1"]);
}

#[test]
fn test_records_serialize_for_dumping() {
    let catalog = seeded_catalog();
    let records: Vec<_> = catalog.iter().map(|(_, record)| record).collect();

    let json = serde_json::to_string(&records).expect("records should serialize");
    assert!(json.contains("\"Texture1\""));
    assert!(json.contains("\"Assets/Model1\""));
}
