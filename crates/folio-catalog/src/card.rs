//! Project card markup

use chrono::{DateTime, Datelike, NaiveDate};
use folio_model::{escape_html, ProjectId, ProjectRecord};
use std::time::Duration;

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Page a card links to
pub const DETAIL_PAGE: &str = "project-details.html";

/// Long Spanish date (`15 de marzo de 2024`)
///
/// Accepts `YYYY-MM-DD` or RFC 3339; anything else is returned unchanged.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));

    match date {
        Some(date) => format!(
            "{} de {} de {}",
            date.day(),
            MONTHS_ES[date.month0() as usize],
            date.year()
        ),
        None => raw.to_string(),
    }
}

/// Bootstrap column width for the alternating masonry pattern
#[must_use]
pub fn column_width(id: &ProjectId) -> u8 {
    match id.as_number().map(|n| n % 3) {
        Some(0) => 7,
        _ => 6,
    }
}

/// Top-margin class for the alternating masonry pattern
#[must_use]
pub fn margin_class(id: &ProjectId) -> &'static str {
    match id.as_number().map(|n| n % 3) {
        Some(2) => "mt-lg-0",
        _ => "mt-140",
    }
}

/// Link to a project's detail page
///
/// The id is form-encoded so it reads back unchanged from the query string.
#[must_use]
pub fn detail_href(id: &ProjectId) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(id.as_str().as_bytes()).collect();
    format!("{DETAIL_PAGE}?id={}", escape_html(&encoded))
}

/// One rendered card with its cascade offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot {
    /// Insertion delay relative to the first card
    pub delay: Duration,
    /// Card markup
    pub markup: String,
}

/// Cards for `records`, the i-th delayed by `i * step`
#[must_use]
pub fn card_slots(records: &[&ProjectRecord], step: Duration) -> Vec<CardSlot> {
    records
        .iter()
        .zip(0u32..)
        .map(|(record, index)| {
            let delay = step.saturating_mul(index);
            CardSlot {
                delay,
                markup: card_markup(record, delay),
            }
        })
        .collect()
}

/// Markup for one project card
#[must_use]
pub fn card_markup(record: &ProjectRecord, delay: Duration) -> String {
    let href = detail_href(&record.id);
    let title = escape_html(&record.title);
    let margin = margin_class(&record.id);

    let categories: String = record
        .categories
        .iter()
        .map(|c| format!(r#"<li><a href="blog.html">{}</a></li>"#, escape_html(c)))
        .collect();
    let software: String = record
        .software
        .iter()
        .map(|s| format!(r#"<span class="badge bg-primary me-1">{}</span>"#, escape_html(s)))
        .collect();

    format!(
        r#"<div class="col-lg-{col} filter-item {margin}" data-project-id="{id}" style="animation-delay: {delay_ms}ms">
    <div class="portfolio-wrap {margin}">
        <div class="portfolio-thumb">
            <a href="{href}"><img src="{image}" alt="{title}" loading="lazy"></a>
            <div class="portfolio-overlay">
                <div class="portfolio-overlay-content">
                    <div class="portfolio-meta">{categories}</div>
                    <div class="portfolio-tech">{software}</div>
                </div>
            </div>
        </div>
        <div class="portfolio-details">
            <ul class="portfolio-meta">{categories}</ul>
            <h3 class="portfolio-title"><a href="{href}">{title}</a></h3>
            <p class="portfolio-subtitle">{subtitle}</p>
            <p class="portfolio-description">{description}</p>
            <div class="portfolio-meta-bottom">
                <span class="portfolio-date"><i class="fas fa-calendar"></i> {date}</span>
                <span class="portfolio-client"><i class="fas fa-user"></i> {client}</span>
            </div>
            <a href="{href}" class="link-btn">
                <span class="link-effect">
                    <span class="effect-1">VER PROYECTO</span>
                    <span class="effect-1">VER PROYECTO</span>
                </span>
                <img src="assets/img/icon/arrow-left-top.svg" alt="icon">
            </a>
        </div>
    </div>
</div>
"#,
        col = column_width(&record.id),
        id = escape_html(record.id.as_str()),
        delay_ms = delay.as_millis(),
        image = escape_html(&record.image),
        subtitle = escape_html(&record.subtitle),
        description = escape_html(&record.description),
        date = escape_html(&format_date(&record.date)),
        client = escape_html(&record.client),
    )
}
