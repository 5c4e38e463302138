//! Page model
//!
//! The page template owns markup and styling; loaders only write into a fixed
//! set of named regions. [`Page`] records what was written to each region and
//! whether it is shown, so a loader's output can be inspected, serialized, or
//! spliced into the template.

use crate::markup::{escape_attr, escape_html};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Named container in a page template
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    // Catalog page
    /// Card grid
    ProjectsContainer,
    /// Spinner shown while the catalog loads
    LoadingSpinner,
    /// Empty-state notice
    NoResults,
    /// "Load more" control
    LoadMoreContainer,

    // JSON detail page
    /// Image gallery
    ProjectGallery,
    /// Key-value info list
    ProjectInfo,
    /// Project heading
    ProjectTitle,
    /// Description paragraphs
    ProjectDescription,
    /// Challenge statement
    ProjectChallenge,
    /// Solution statement
    ProjectSolution,
    /// Result statements
    ProjectResults,
    /// Link to the previous project
    NavPrev,
    /// Link to the next project
    NavNext,
    /// Not-found or load-failure notice
    ProjectStatus,

    // Fragment detail page
    /// Container for an injected fragment
    ProjectContent,
}

impl Region {
    /// Regions written by the JSON detail loader from record fields
    pub const DETAIL_CONTENT: [Region; 9] = [
        Region::ProjectGallery,
        Region::ProjectInfo,
        Region::ProjectTitle,
        Region::ProjectDescription,
        Region::ProjectChallenge,
        Region::ProjectSolution,
        Region::ProjectResults,
        Region::NavPrev,
        Region::NavNext,
    ];

    /// Element id of the region in the page template
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::ProjectsContainer => "projects-container",
            Self::LoadingSpinner => "loading-spinner",
            Self::NoResults => "no-results",
            Self::LoadMoreContainer => "load-more-container",
            Self::ProjectGallery => "project-gallery",
            Self::ProjectInfo => "project-info",
            Self::ProjectTitle => "project-title",
            Self::ProjectDescription => "project-description",
            Self::ProjectChallenge => "project-challenge",
            Self::ProjectSolution => "project-solution",
            Self::ProjectResults => "project-results",
            Self::NavPrev => "nav-prev",
            Self::NavNext => "nav-next",
            Self::ProjectStatus => "project-status",
            Self::ProjectContent => "project-content",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.element_id())
    }
}

/// What a loader wrote into a region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Content {
    /// Untouched or emptied
    #[default]
    Empty,
    /// Inner markup, inserted as-is
    Markup(String),
    /// Plain text; escaped when rendered
    Text(String),
    /// Link target for an anchor region
    Href(String),
}

impl Content {
    /// Whether anything was written
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Content and visibility of one region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionState {
    /// What was written
    pub content: Content,
    /// Whether the region is shown
    pub visible: bool,
}

impl Default for RegionState {
    fn default() -> Self {
        Self {
            content: Content::Empty,
            visible: true,
        }
    }
}

/// Regions written by a loader, plus the active catalog filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    regions: BTreeMap<Region, RegionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_filter: Option<String>,
}

impl Page {
    /// Create a page with no regions written
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, region: Region) -> &mut RegionState {
        self.regions.entry(region).or_default()
    }

    /// Replace the region's inner markup
    pub fn set_markup(&mut self, region: Region, markup: impl Into<String>) {
        self.entry(region).content = Content::Markup(markup.into());
    }

    /// Replace the region's text content
    pub fn set_text(&mut self, region: Region, text: impl Into<String>) {
        self.entry(region).content = Content::Text(text.into());
    }

    /// Set the region's link target
    pub fn set_href(&mut self, region: Region, href: impl Into<String>) {
        self.entry(region).content = Content::Href(href.into());
    }

    /// Empty the region
    pub fn clear(&mut self, region: Region) {
        self.entry(region).content = Content::Empty;
    }

    /// Show or hide the region
    pub fn set_visible(&mut self, region: Region, visible: bool) {
        self.entry(region).visible = visible;
    }

    /// Show region
    #[inline]
    pub fn show(&mut self, region: Region) {
        self.set_visible(region, true);
    }

    /// Hide region
    #[inline]
    pub fn hide(&mut self, region: Region) {
        self.set_visible(region, false);
    }

    /// Mark the active catalog filter
    pub fn set_active_filter(&mut self, token: impl Into<String>) {
        self.active_filter = Some(token.into());
    }

    /// Active catalog filter, if a catalog was rendered
    #[inline]
    #[must_use]
    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    /// Region state, if the loader touched the region
    #[inline]
    #[must_use]
    pub fn region(&self, region: Region) -> Option<&RegionState> {
        self.regions.get(&region)
    }

    /// Region content; `Content::Empty` for untouched regions
    #[must_use]
    pub fn content(&self, region: Region) -> &Content {
        static EMPTY: Content = Content::Empty;
        self.regions.get(&region).map_or(&EMPTY, |state| &state.content)
    }

    /// Markup or text of a region, if any
    #[must_use]
    pub fn body(&self, region: Region) -> Option<&str> {
        match self.content(region) {
            Content::Markup(s) | Content::Text(s) | Content::Href(s) => Some(s),
            Content::Empty => None,
        }
    }

    /// Whether the region holds content
    #[inline]
    #[must_use]
    pub fn is_populated(&self, region: Region) -> bool {
        !self.content(region).is_empty()
    }

    /// Whether the region was touched and is shown
    #[inline]
    #[must_use]
    pub fn is_visible(&self, region: Region) -> bool {
        self.regions.get(&region).is_some_and(|state| state.visible)
    }

    /// Touched regions in declaration order
    pub fn regions(&self) -> impl Iterator<Item = (Region, &RegionState)> {
        self.regions.iter().map(|(region, state)| (*region, state))
    }

    /// Render touched regions as standalone elements
    ///
    /// Hidden regions carry the `hidden` attribute; anchor regions render as
    /// `<a>` elements with their `href`.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (region, state) in &self.regions {
            let hidden = if state.visible { "" } else { " hidden" };
            let id = region.element_id();
            // Writing to a String cannot fail
            let _ = match &state.content {
                Content::Href(href) => writeln!(
                    out,
                    r#"<a id="{id}" href="{}"{hidden}></a>"#,
                    escape_attr(href)
                ),
                Content::Markup(markup) => {
                    writeln!(out, r#"<div id="{id}"{hidden}>{markup}</div>"#)
                }
                Content::Text(text) => writeln!(
                    out,
                    r#"<div id="{id}"{hidden}>{}</div>"#,
                    escape_html(text)
                ),
                Content::Empty => writeln!(out, r#"<div id="{id}"{hidden}></div>"#),
            };
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn untouched_region_is_empty_and_not_visible() {
        let page = Page::new();
        assert!(!page.is_populated(Region::ProjectTitle));
        assert!(!page.is_visible(Region::ProjectTitle));
        assert_eq!(page.body(Region::ProjectTitle), None);
    }

    #[test]
    fn writes_replace_content() {
        let mut page = Page::new();
        page.set_markup(Region::ProjectsContainer, "<div>a</div>");
        page.set_markup(Region::ProjectsContainer, "<div>b</div>");
        assert_eq!(page.body(Region::ProjectsContainer), Some("<div>b</div>"));
        assert!(page.is_visible(Region::ProjectsContainer));

        page.clear(Region::ProjectsContainer);
        assert!(!page.is_populated(Region::ProjectsContainer));
    }

    #[test]
    fn hide_and_show() {
        let mut page = Page::new();
        page.hide(Region::NoResults);
        assert!(!page.is_visible(Region::NoResults));
        page.show(Region::NoResults);
        assert!(page.is_visible(Region::NoResults));
    }

    #[test]
    fn html_rendering_escapes_text_not_markup() {
        let mut page = Page::new();
        page.set_text(Region::ProjectTitle, "A & B");
        page.set_markup(Region::ProjectContent, "<p>ok</p>");
        page.set_href(Region::NavNext, "details.html?id=a&x=1");
        page.hide(Region::NoResults);

        let html = page.to_html();
        assert!(html.contains(r#"<div id="project-title">A &amp; B</div>"#));
        assert!(html.contains(r#"<div id="project-content"><p>ok</p></div>"#));
        assert!(html.contains(r#"<a id="nav-next" href="details.html?id=a&amp;x=1"></a>"#));
        assert!(html.contains(r#"<div id="no-results" hidden></div>"#));
    }

    #[test]
    fn serializes_with_element_ids() {
        let mut page = Page::new();
        page.set_text(Region::ProjectTitle, "EcoBikes");
        page.set_active_filter("web");

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json["regions"]["project-title"]["content"],
            serde_json::json!({"kind": "text", "value": "EcoBikes"})
        );
        assert_eq!(json["active_filter"], "web");
    }
}
