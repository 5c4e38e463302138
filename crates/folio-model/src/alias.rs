//! Slug alias table
//!
//! Links to project pages arrive with many spellings of the same project
//! (`tecnico`, `técnicos`, `servicio-tecnico`, ...). The table maps each known
//! spelling to a canonical slug, the name of the project's fragment file.
//!
//! Resolution is exact-key lookup with no case, accent or punctuation folding:
//! every accepted variant is listed explicitly. Unknown ids pass through
//! unchanged.

use crate::error::ModelError;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    // Técnicos / reparaciones
    ("tecnicos", "tecnicos"),
    ("técnicos", "tecnicos"),
    ("tecnico", "tecnicos"),
    ("técnico", "tecnicos"),
    ("tecnicos_y_reparaciones", "tecnicos"),
    ("tecnicos-reparaciones", "tecnicos"),
    ("tecnicos_reparaciones", "tecnicos"),
    ("tecnicosreparaciones", "tecnicos"),
    ("tecnico_y_reparacion", "tecnicos"),
    ("tecnico-reparacion", "tecnicos"),
    ("tecnico_reparacion", "tecnicos"),
    ("tecnicoreparacion", "tecnicos"),
    ("reparaciones", "tecnicos"),
    ("reparacion", "tecnicos"),
    ("repair", "tecnicos"),
    ("service-tech", "tecnicos"),
    ("servicio-tecnico", "tecnicos"),
    ("servicio_tecnico", "tecnicos"),
    ("serviciotecnico", "tecnicos"),
    ("tureparador", "tecnicos"),
    ("tu_reparador", "tecnicos"),
    ("tu-reparador", "tecnicos"),
    ("reparador", "tecnicos"),
    ("turep", "tecnicos"),
    ("fixer", "tecnicos"),
    ("donreparador", "tecnicos"),
    ("servicios", "tecnicos"),
    // EcoBikes
    ("ecobikes", "ecobikes"),
    ("eco-bikes", "ecobikes"),
    ("eco_bikes", "ecobikes"),
    ("eco", "ecobikes"),
    ("ecobike", "ecobikes"),
    ("ecobiking", "ecobikes"),
    ("eco_bike", "ecobikes"),
    ("ecobikechile", "ecobikes"),
    ("ecobikes_cl", "ecobikes"),
    ("ecobikeschile", "ecobikes"),
    ("ecoenvios", "ecobikes"),
    ("envios-eco", "ecobikes"),
    ("envios-ecobikes", "ecobikes"),
    ("delivery", "ecobikes"),
    ("envios", "ecobikes"),
    ("bike", "ecobikes"),
    // Via-Z
    ("viaz", "viaz"),
    ("via-z", "viaz"),
    ("via_z", "viaz"),
    ("viaz_app", "viaz"),
    ("via-app", "viaz"),
    ("via", "viaz"),
    ("transportes", "viaz"),
    ("traslados", "viaz"),
    ("viajes", "viaz"),
    ("transporte", "viaz"),
    ("movilidad", "viaz"),
    // FitoSalud
    ("fitosalud", "fitosalud"),
    ("fito-salud", "fitosalud"),
    ("fito_salud", "fitosalud"),
    ("fito", "fitosalud"),
    ("salud", "fitosalud"),
    ("telemedicina", "fitosalud"),
    ("citas_medicas", "fitosalud"),
    ("medicos", "fitosalud"),
    // Gesgan
    ("gesgan", "gesgan"),
    ("ges-gan", "gesgan"),
    ("ges_gan", "gesgan"),
    ("ganaderia", "gesgan"),
    ("ganados", "gesgan"),
    ("granja", "gesgan"),
    ("agro", "gesgan"),
    ("erp_ganadero", "gesgan"),
    // Aplicoat
    ("aplicoat", "aplicoat"),
    ("apli-coat", "aplicoat"),
    ("apli_coat", "aplicoat"),
    ("coat", "aplicoat"),
    ("pinturas", "aplicoat"),
    ("anticorrosion", "aplicoat"),
    ("recubrimientos", "aplicoat"),
    ("industrial", "aplicoat"),
];

static BUILTIN: Lazy<AliasTable> = Lazy::new(|| {
    AliasTable::from_pairs(
        BUILTIN_ALIASES
            .iter()
            .map(|(alias, slug)| (alias.to_string(), slug.to_string())),
    )
});

/// Many-to-one map from input spelling to canonical slug
///
/// A canonical slug is a value that maps to itself; every other value must be
/// canonical, so resolution is a single lookup and cannot cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Create empty table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's built-in table
    #[inline]
    #[must_use]
    pub fn builtin() -> &'static AliasTable {
        &BUILTIN
    }

    fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Add or replace an alias
    pub fn insert(&mut self, alias: impl Into<String>, slug: impl Into<String>) {
        self.entries.insert(alias.into(), slug.into());
    }

    /// Copy of this table with `extra` entries layered on top, validated
    ///
    /// # Errors
    /// `ModelError::InvalidAlias` if the merged table has a non-canonical target
    pub fn merged<I, K, V>(&self, extra: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = self.clone();
        for (alias, slug) in extra {
            table.insert(alias, slug);
        }
        table.validate()?;
        Ok(table)
    }

    /// Resolve an input id to its canonical slug, or the id itself if unknown
    #[inline]
    #[must_use]
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.entries.get(id).map_or(id, String::as_str)
    }

    /// Whether `id` is a known alias (canonical slugs included)
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Distinct targets, sorted
    #[must_use]
    pub fn canonical_slugs(&self) -> BTreeSet<&str> {
        self.entries.values().map(String::as_str).collect()
    }

    /// Check every target is canonical (maps to itself)
    ///
    /// # Errors
    /// `ModelError::InvalidAlias` naming the first offending entry in key order
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut keys: Vec<_> = self.entries.keys().collect();
        keys.sort();
        for alias in keys {
            let target = &self.entries[alias];
            if self.entries.get(target) != Some(target) {
                return Err(ModelError::InvalidAlias {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(())
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        AliasTable::builtin().validate().unwrap();
    }

    #[test]
    fn builtin_has_six_canonical_slugs() {
        let slugs: Vec<_> = AliasTable::builtin().canonical_slugs().into_iter().collect();
        assert_eq!(
            slugs,
            vec!["aplicoat", "ecobikes", "fitosalud", "gesgan", "tecnicos", "viaz"]
        );
    }

    #[test]
    fn resolves_known_variants() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve("reparacion"), "tecnicos");
        assert_eq!(table.resolve("técnico"), "tecnicos");
        assert_eq!(table.resolve("via-z"), "viaz");
        assert_eq!(table.resolve("envios"), "ecobikes");
        assert_eq!(table.resolve("gesgan"), "gesgan");
    }

    #[test]
    fn unknown_ids_pass_through() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve("nuevo-proyecto"), "nuevo-proyecto");
        assert_eq!(table.resolve(""), "");
    }

    #[test]
    fn no_folding_is_applied() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve("Reparacion"), "Reparacion");
        assert_eq!(table.resolve(" viaz"), " viaz");
        assert!(!table.contains("VIAZ"));
    }

    #[test]
    fn merge_adds_new_project() {
        let table = AliasTable::builtin()
            .merged([("portal", "portal"), ("portal-web", "portal")])
            .unwrap();
        assert_eq!(table.resolve("portal-web"), "portal");
        assert_eq!(table.resolve("reparacion"), "tecnicos");
        assert!(table.canonical_slugs().contains("portal"));
    }

    #[test]
    fn merge_rejects_chained_alias() {
        let err = AliasTable::builtin()
            .merged([("arreglos", "reparacion")])
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidAlias { ref alias, ref target }
                if alias == "arreglos" && target == "reparacion"
        ));
    }

    #[test]
    fn merge_rejects_dangling_target() {
        assert!(AliasTable::new().merged([("x", "y")]).is_err());
    }
}
