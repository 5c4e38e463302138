//! Detail page loads against in-memory and on-disk sites

use folio_detail::{
    DetailConfig, DetailOutcome, FragmentLoader, FragmentOutcome, JsonDetailLoader,
};
use folio_fetch::FileFetcher;
use folio_model::{AliasTable, Page, PageQuery, Region};
use folio_test_utils::{detail_json, write_site, MemoryFetcher};
use pretty_assertions::assert_eq;

const DATA: &str = "assets/data/projects.json";

#[tokio::test]
async fn json_loader_defaults_to_ecobikes() {
    let fetcher = MemoryFetcher::new().with_file(DATA, detail_json(&["ecobikes", "viaz"]));
    let loader = JsonDetailLoader::new(fetcher, DetailConfig::new()).unwrap();
    let mut page = Page::new();

    let outcome = loader.load(&PageQuery::default(), &mut page).await;
    assert_eq!(
        outcome,
        DetailOutcome::Rendered {
            id: "ecobikes".to_string()
        }
    );
    assert_eq!(page.body(Region::ProjectTitle), Some("ecobikes title"));
    for region in Region::DETAIL_CONTENT {
        assert!(page.is_populated(region), "{region} not populated");
    }
}

#[tokio::test]
async fn json_miss_leaves_content_regions_empty() {
    let fetcher = MemoryFetcher::new().with_file(DATA, detail_json(&["ecobikes"]));
    let loader = JsonDetailLoader::new(fetcher, DetailConfig::new()).unwrap();
    let mut page = Page::new();

    let outcome = loader.load(&PageQuery::parse("?id=nope"), &mut page).await;
    assert_eq!(
        outcome,
        DetailOutcome::NotFound {
            id: "nope".to_string()
        }
    );
    for region in Region::DETAIL_CONTENT {
        assert!(!page.is_populated(region), "{region} was written");
    }
    assert!(page.body(Region::ProjectStatus).unwrap().contains("<strong>nope</strong>"));
}

#[tokio::test]
async fn json_loader_does_not_resolve_aliases() {
    let fetcher = MemoryFetcher::new().with_file(DATA, detail_json(&["tecnicos"]));
    let loader = JsonDetailLoader::new(fetcher, DetailConfig::new()).unwrap();
    let mut page = Page::new();

    let outcome = loader.load(&PageQuery::parse("?id=reparacion"), &mut page).await;
    assert!(!outcome.is_rendered());
}

#[tokio::test]
async fn json_document_failure_is_reported() {
    let fetcher = MemoryFetcher::new().with_status(DATA, 500);
    let loader = JsonDetailLoader::new(fetcher, DetailConfig::new()).unwrap();
    let mut page = Page::new();

    let outcome = loader.load(&PageQuery::parse("?id=viaz"), &mut page).await;
    assert!(matches!(outcome, DetailOutcome::Failed { ref id, .. } if id == "viaz"));
    assert!(page.is_populated(Region::ProjectStatus));
    assert!(!page.is_populated(Region::ProjectTitle));
}

#[tokio::test]
async fn alias_resolves_to_fragment_path() {
    let fetcher = MemoryFetcher::new().with_file("projects/tecnicos.html", "<section>Técnicos</section>");
    let loader = FragmentLoader::new(fetcher, DetailConfig::new()).unwrap();
    let mut page = Page::new();

    let outcome = loader.load(&PageQuery::parse("?id=reparacion"), &mut page).await;
    assert_eq!(
        outcome,
        FragmentOutcome::Injected {
            slug: "tecnicos".to_string(),
            path: "projects/tecnicos.html".to_string(),
        }
    );
    assert_eq!(page.body(Region::ProjectContent), Some("<section>Técnicos</section>"));
}

#[tokio::test]
async fn missing_fragment_shows_named_error() {
    let fetcher = MemoryFetcher::new();
    let loader = FragmentLoader::new(fetcher, DetailConfig::new()).unwrap();
    let mut page = Page::new();

    let outcome = loader.load(&PageQuery::parse("?id=Proyecto-X"), &mut page).await;
    assert!(matches!(outcome, FragmentOutcome::Failed { ref slug, .. } if slug == "Proyecto-X"));

    let body = page.body(Region::ProjectContent).unwrap();
    assert!(body.contains("Error al cargar el proyecto"));
    assert!(body.contains("<strong>Proyecto-X</strong>"));
}

#[tokio::test]
async fn custom_aliases_must_be_canonical() {
    let loader = FragmentLoader::new(MemoryFetcher::new(), DetailConfig::new()).unwrap();
    let chained = AliasTable::builtin().merged([("portal", "reparacion")]);
    assert!(chained.is_err());

    let extended = AliasTable::builtin()
        .merged([("portal", "portal"), ("web-portal", "portal")])
        .unwrap();
    let loader = loader.with_aliases(extended).unwrap();
    assert_eq!(loader.resolve(&PageQuery::parse("?id=web-portal")), "portal");
}

#[tokio::test]
async fn check_reports_missing_fragments() {
    let site = tempfile::tempdir().unwrap();
    let present = ["tecnicos", "ecobikes", "viaz", "fitosalud", "gesgan"];
    let files: Vec<(String, String)> = present
        .iter()
        .map(|slug| (format!("projects/{slug}.html"), format!("<h1>{slug}</h1>")))
        .collect();
    let borrowed: Vec<(&str, &str)> = files.iter().map(|(p, b)| (p.as_str(), b.as_str())).collect();
    write_site(site.path(), &borrowed);

    let loader = FragmentLoader::new(FileFetcher::new(site.path()), DetailConfig::new()).unwrap();
    let checks = loader.check_fragments().await;

    assert_eq!(checks.len(), 6);
    let missing: Vec<_> = checks.iter().filter(|c| !c.is_ok()).map(|c| c.slug.as_str()).collect();
    assert_eq!(missing, vec!["aplicoat"]);
}
