//! Behavioral properties of prefix search.

use symdex_index::{IndexStore, MalformedIndexError, SymbolKind};
use symdex_query::{DEFAULT_LIMIT, QueryError, SearchParams, search, search_with};

/// The generator's search data for the letter `t`, trimmed to a few records.
const TILESON: &str = "var searchData=
[
  ['template',['Template',['../classtson_1_1Object.html#a57a5d95ed19603db6cf16a8f965b9e06a278c491bdd8a53618c149c4ac790da34',1,'tson::Object']]],
  ['terrain',['Terrain',['../classtson_1_1Terrain.html',1,'tson::Terrain'],['../classtson_1_1Terrain.html#a7c8e6376dd169f808da21b8f55476553',1,'tson::Terrain::Terrain()=default']]],
  ['terrain_2ecpp',['Terrain.cpp',['../Terrain_8cpp.html',1,'']]],
  ['tile',['Tile',['../classtson_1_1Tile.html',1,'tson::Tile']]],
  ['tile_2ecpp',['Tile.cpp',['../Tile_8cpp.html',1,'']]],
  ['tile_2eh',['Tile.h',['../Tile_8h.html',1,'']]],
  ['tilelayer',['TileLayer',['../classtson_1_1Layer.html#a91f3be29328960e463a90930a06e8507a7e18e515be43f6e6b19b591782303669',1,'tson::Layer']]],
  ['tileset',['Tileset',['../classtson_1_1Tileset.html',1,'tson::Tileset']]],
  ['tson',['tson',['../namespacetson.html',1,'']]]
];
";

/// Loads the sample index.
fn store() -> IndexStore {
    IndexStore::load(TILESON).unwrap()
}

/// Returns result keys for a query with the default limit.
fn keys(query: &str, store: &IndexStore) -> Vec<String> {
    search(query, store, DEFAULT_LIMIT)
        .unwrap()
        .into_iter()
        .map(|r| r.key)
        .collect()
}

#[test]
fn every_prefix_finds_its_entry() {
    let store = store();
    for entry in store.all() {
        for (end, _) in entry.key.char_indices().skip(1).chain([(entry.key.len(), ' ')]) {
            let prefix = &entry.key[..end];
            let found = search(prefix, &store, store.len()).unwrap();
            assert!(
                found.iter().any(|r| r.key == entry.key),
                "prefix {prefix:?} did not find {:?}",
                entry.key
            );
        }
    }
}

#[test]
fn search_is_case_insensitive() {
    let store = store();
    assert_eq!(
        search("Terrain", &store, DEFAULT_LIMIT).unwrap(),
        search("terrain", &store, DEFAULT_LIMIT).unwrap()
    );
    assert_eq!(keys("TILE.CPP", &store), vec!["tile.cpp"]);
}

#[test]
fn empty_query_is_empty() {
    assert!(search("", &store(), DEFAULT_LIMIT).unwrap().is_empty());
}

#[test]
fn exact_and_shorter_keys_rank_first() {
    let keys = keys("tile", &store());
    assert_eq!(keys, vec!["tile", "tile.h", "tileset", "tile.cpp", "tilelayer"]);

    let tile = keys.iter().position(|k| k == "tile").unwrap();
    let tileset = keys.iter().position(|k| k == "tileset").unwrap();
    assert!(tile < tileset);
}

#[test]
fn file_pages_by_extension_prefix() {
    let results = search("tile.", &store(), DEFAULT_LIMIT).unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["Tile.h", "Tile.cpp"]);
    assert!(results.iter().all(|r| r.kind == SymbolKind::File));
    assert!(results.iter().all(|r| r.locations[0].context.is_none()));
}

#[test]
fn records_sharing_a_key_group_in_order() {
    let store = IndexStore::load(
        r#"[
            ["text", ["Text", "classtson_1_1Text.html", "tson::Text"]],
            ["tile", ["Tile", "classtson_1_1Tile.html", null]],
            ["text", ["Text", "classtson_1_1Object.html#a57a5d95ed", "tson::Object"]]
        ]"#,
    )
    .unwrap();

    let results = search("text", &store, DEFAULT_LIMIT).unwrap();
    assert_eq!(results.len(), 1);

    let locations = &results[0].locations;
    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].kind, SymbolKind::Type);
    assert_eq!(locations[0].context.as_deref(), Some("tson::Text"));
    assert_eq!(locations[1].kind, SymbolKind::Member);
    assert_eq!(locations[1].url, "classtson_1_1Object.html#a57a5d95ed");
}

#[test]
fn limit_keeps_highest_ranked_groups() {
    let records: Vec<String> = (0..25)
        .map(|i| format!(r#"["sym{i:02}", ["Sym{i:02}", "classSym{i:02}.html", null]]"#))
        .chain([r#"["sym", ["Sym", "classSym.html", null]]"#.to_string()])
        .collect();
    let store = IndexStore::load(&format!("[{}]", records.join(","))).unwrap();

    let all = search("sym", &store, 100).unwrap();
    assert_eq!(all.len(), 26);

    let limited = search("sym", &store, 20).unwrap();
    assert_eq!(limited.len(), 20);
    assert_eq!(limited[0].key, "sym");
    assert_eq!(limited[..], all[..20]);
    assert_eq!(limited[19].key, "sym18");
}

#[test]
fn zero_limit_is_invalid_argument() {
    let err = search("tile", &store(), 0).unwrap_err();
    assert!(matches!(err, QueryError::InvalidArgument { name: "limit", .. }));
}

#[test]
fn record_without_locations_fails_load() {
    let result = IndexStore::load("var searchData=[['tile',['Tile']]];");
    assert!(matches!(result, Err(MalformedIndexError::NoLocations { .. })));
}

#[test]
fn kind_filter_selects_category() {
    let store = store();
    let params = SearchParams::default().with_kinds(vec![SymbolKind::Namespace, SymbolKind::Member]);
    let results = search_with("t", &store, &params).unwrap();
    let keys: Vec<&str> = results.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["tson", "template", "tilelayer"]);
}

#[test]
fn results_serialize_to_json() {
    let results = search("tson", &store(), DEFAULT_LIMIT).unwrap();
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["key"], "tson");
    assert_eq!(json[0]["kind"], "namespace");
    assert_eq!(json[0]["exact"], true);
    assert_eq!(json[0]["locations"][0]["url"], "../namespacetson.html");
    assert!(json[0]["locations"][0].get("context").is_none());
}
