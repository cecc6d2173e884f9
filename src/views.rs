//! Server-rendered HTML. Every page carries the same navigation list.

use compute::ChartImage;

use crate::schemas::PageLink;

const APP_TITLE: &str = "Climate Analysis";

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn navigation(pages: &[PageLink]) -> String {
    let items: String = pages
        .iter()
        .map(|page| {
            format!(
                "    <li><a href=\"{}\">{}</a></li>\n",
                escape_html(page.url),
                escape_html(page.name)
            )
        })
        .collect();
    format!("<ul>\n{items}  </ul>")
}

fn layout(title: &str, body: &str, pages: &[PageLink]) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n  <meta charset=\"utf-8\">\n  <title>{title}</title>\n</head>\n\
         <body>\n\
         <nav>\n  {nav}\n</nav>\n\
         <main>\n{body}\n</main>\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
        nav = navigation(pages),
    )
}

pub fn index_page(pages: &[PageLink]) -> String {
    let body = format!("  <h1>{}</h1>", escape_html(APP_TITLE));
    layout(APP_TITLE, &body, pages)
}

/// Page embedding a chart inline as a base64 PNG data URL.
pub fn chart_page(title: &str, chart: &ChartImage, pages: &[PageLink]) -> String {
    let body = format!(
        "  <h1>{title}</h1>\n  <img src=\"data:image/png;base64,{data}\" alt=\"{title}\">",
        title = escape_html(title),
        data = chart.to_base64(),
    );
    layout(title, &body, pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::PAGES;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn index_links_every_page() {
        let html = index_page(&PAGES);

        for page in PAGES {
            assert!(html.contains(&format!("<a href=\"{}\">{}</a>", page.url, page.name)));
        }
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn navigation_lists_escaped_links_in_order() {
        let pages = [
            PageLink { name: "Home", url: "/" },
            PageLink { name: "A & B", url: "/a?x=1&y=2" },
        ];

        assert_eq!(
            navigation(&pages),
            "<ul>\n    <li><a href=\"/\">Home</a></li>\n    \
             <li><a href=\"/a?x=1&amp;y=2\">A &amp; B</a></li>\n  </ul>"
        );
    }

    #[test]
    fn navigation_without_pages_is_an_empty_list() {
        assert_eq!(navigation(&[]), "<ul>\n  </ul>");
    }
}
