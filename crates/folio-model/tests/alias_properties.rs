//! Alias resolution properties
//!
//! Resolution must be total (every string maps to exactly one slug) and
//! deterministic, and must land on a canonical slug whenever the input is a
//! known alias.

use folio_model::AliasTable;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_resolution_is_deterministic(id in ".{0,24}") {
        let table = AliasTable::builtin();
        prop_assert_eq!(table.resolve(&id), table.resolve(&id));
    }

    #[test]
    fn prop_unknown_ids_resolve_to_themselves(id in "[a-z0-9_-]{1,24}") {
        let table = AliasTable::builtin();
        prop_assume!(!table.contains(&id));
        prop_assert_eq!(table.resolve(&id), id.as_str());
    }

    #[test]
    fn prop_resolution_is_idempotent(id in "[a-zé_-]{0,16}") {
        let table = AliasTable::builtin();
        let once = table.resolve(&id).to_string();
        prop_assert_eq!(table.resolve(&once), once.as_str());
    }
}

#[test]
fn every_known_alias_lands_on_a_canonical_slug() {
    let table = AliasTable::builtin();
    let slugs = table.canonical_slugs();
    for slug in &slugs {
        assert_eq!(table.resolve(slug), *slug);
    }
    for input in ["tu-reparador", "citas_medicas", "erp_ganadero", "apli_coat", "eco"] {
        assert!(slugs.contains(table.resolve(input)), "{input} did not resolve");
    }
}
