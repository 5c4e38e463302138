//! Catalog rendering pass: state in, page regions out

use crate::card::card_slots;
use crate::state::{CatalogState, LoadPhase};
use folio_model::{escape_html, Page, Region};
use std::time::Duration;

/// Error block shown in the grid once every catalog source has failed
#[must_use]
pub fn error_markup(message: &str) -> String {
    format!(
        r#"<div class="col-12 text-center">
    <div class="alert alert-danger" role="alert">
        <h4 class="alert-heading">Error al cargar proyectos</h4>
        <p>{}</p>
        <button class="btn btn-danger" onclick="location.reload()">
            <i class="fas fa-refresh"></i> Reintentar
        </button>
    </div>
</div>
"#,
        escape_html(message)
    )
}

/// Write the catalog regions of `page` for `state`
///
/// The grid is redrawn in full on every pass: after "load more" it holds the
/// whole enlarged window, not just the new cards.
pub fn render(state: &CatalogState, page: &mut Page, card_delay: Duration) {
    page.set_active_filter(state.filter());

    match state.phase() {
        LoadPhase::Idle => {
            page.hide(Region::LoadingSpinner);
        }
        LoadPhase::Loading => {
            page.show(Region::LoadingSpinner);
            page.hide(Region::ProjectsContainer);
            page.hide(Region::NoResults);
            page.hide(Region::LoadMoreContainer);
        }
        LoadPhase::Failed { message } => {
            page.hide(Region::LoadingSpinner);
            page.set_markup(Region::ProjectsContainer, error_markup(message));
            page.show(Region::ProjectsContainer);
            page.hide(Region::NoResults);
            page.hide(Region::LoadMoreContainer);
        }
        LoadPhase::Ready => {
            page.hide(Region::LoadingSpinner);
            let view = state.view();

            if view.is_empty() {
                page.clear(Region::ProjectsContainer);
                page.hide(Region::ProjectsContainer);
                page.show(Region::NoResults);
                page.hide(Region::LoadMoreContainer);
                return;
            }

            let grid: String = card_slots(view.visible(), card_delay)
                .into_iter()
                .map(|slot| slot.markup)
                .collect();
            page.set_markup(Region::ProjectsContainer, grid);
            page.show(Region::ProjectsContainer);
            page.hide(Region::NoResults);
            page.set_visible(Region::LoadMoreContainer, view.load_more_visible());
        }
    }
}
