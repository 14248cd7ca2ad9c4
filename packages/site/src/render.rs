//! HTML rendering of site pages.
//!
//! Editor HTML comes from the CMS and is inserted as-is; every other
//! string is escaped. Empty sections are left out of the page.

use campus_content::{DepartmentSection, GenericSection, LinkRecord, MarqueeItem, PlacementRecord};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

const STYLESHEET: &str = "/static/site.css";

/// Wrap a page body in the site shell.
pub fn layout(title: &str, details: &str, body: &str) -> String {
    let details = if details.trim().is_empty() {
        String::new()
    } else {
        format!("<p class=\"details\">{}</p>\n", text(details))
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<link rel=\"stylesheet\" href=\"{STYLESHEET}\">\n</head>\n\
         <body>\n<main>\n<h1>{title}</h1>\n{details}{body}</main>\n</body>\n</html>\n",
        title = text(title),
    )
}

fn gallery(images: &[String]) -> String {
    if images.is_empty() {
        return String::new();
    }
    let items: String = images
        .iter()
        .map(|src| format!("<img src=\"{}\" alt=\"\">", attr(src)))
        .collect();
    format!("<div class=\"gallery\">{items}</div>\n")
}

fn editor_block(html: &str) -> String {
    if html.trim().is_empty() {
        String::new()
    } else {
        format!("<div class=\"editor\">{html}</div>\n")
    }
}

/// Home page: announcement bar, banner images, then the editor body.
pub fn home_body(marquee: &[MarqueeItem], images: &[String], editor_html: &str) -> String {
    let mut out = String::new();
    let items: String = marquee
        .iter()
        .filter(|item| !item.is_empty())
        .map(|item| format!("<li>{}</li>", text(item)))
        .collect();
    if !items.is_empty() {
        out.push_str(&format!("<ul class=\"marquee\">{items}</ul>\n"));
    }
    out.push_str(&gallery(images));
    out.push_str(&editor_block(editor_html));
    out
}

/// Department page. Falls back to the whole editor body when no heading
/// was recognised.
pub fn department_body(section: &DepartmentSection, editor_html: &str) -> String {
    if section.is_empty() {
        return editor_block(editor_html);
    }

    [
        ("vision", "Vision", &section.vision),
        ("mission", "Mission", &section.mission),
        ("programs", "Programs", &section.programs),
    ]
    .into_iter()
    .filter(|(_, _, html)| !html.is_empty())
    .map(|(id, heading, html)| {
        format!("<section id=\"{id}\">\n<h2>{heading}</h2>\n{html}\n</section>\n")
    })
    .collect()
}

fn placement_card(record: &PlacementRecord) -> String {
    let mut card = String::from("<li class=\"placement\">");
    if !record.image.is_empty() {
        card.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            attr(&record.image),
            attr(&record.name)
        ));
    }
    card.push_str(&format!("<h3>{}</h3>", text(&record.name)));
    for (class, value) in [
        ("company", &record.company),
        ("package", &record.package),
        ("desc", &record.desc),
        ("dept", &record.dept),
        ("badge", &record.badge),
    ] {
        if !value.is_empty() {
            card.push_str(&format!("<p class=\"{class}\">{}</p>", text(value)));
        }
    }
    card.push_str("</li>");
    card
}

pub fn placements_body(records: &[PlacementRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }
    let cards: String = records.iter().map(placement_card).collect();
    format!("<ul class=\"placements\">{cards}</ul>\n")
}

/// Downloads page. Hrefs are expected to be absolute already.
pub fn downloads_body(links: &[LinkRecord]) -> String {
    if links.is_empty() {
        return String::new();
    }
    let items: String = links
        .iter()
        .map(|link| {
            format!(
                "<li><a href=\"{}\">{}</a></li>",
                attr(&link.href),
                text(&link.title)
            )
        })
        .collect();
    format!("<ul class=\"downloads\">{items}</ul>\n")
}

/// Generic page: each table-anchored section under its own heading.
pub fn sections_body(sections: &[GenericSection], images: &[String]) -> String {
    let mut out = gallery(images);
    for section in sections.iter().filter(|s| !s.content.trim().is_empty()) {
        out.push_str("<section>\n");
        if let Some(title) = &section.title {
            out.push_str(&format!("<h2>{}</h2>\n", text(title)));
        }
        out.push_str(&section.content);
        out.push_str("\n</section>\n");
    }
    out
}

pub fn not_found_page(path: &str) -> String {
    layout(
        "Page not found",
        "",
        &format!(
            "<p>There is no page at <code>{}</code>.</p>\n<p><a href=\"/\">Back to home</a></p>\n",
            text(path)
        ),
    )
}

pub fn error_page(status: u16) -> String {
    layout(
        "Something went wrong",
        "",
        &format!("<p>The page could not be loaded (status {status}). Please try again later.</p>\n"),
    )
}
