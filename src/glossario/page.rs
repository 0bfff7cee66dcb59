//! # Page Assembly
//!
//! Renders the fixed parts of the merged page (header with the navigation menu,
//! footer) and wraps processed section markup in its container.
//!
//! The navigation behavior itself lives in the external script referenced by
//! the footer. That script expects:
//! - `section.content-section` containers, the visible one carrying `active`
//! - menu buttons calling `showSection('{id}')`
//! - an empty `#alphabet-index` container it fills on load

use crate::config::PageMeta;
use crate::model::SectionDescriptor;

/// Header markup up to and including the opening `<main>`.
pub fn render_header(page: &PageMeta, sections: &[SectionDescriptor]) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", escape(&page.lang)));
    out.push_str("<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str(&format!(
        "    <meta name=\"description\" content=\"{}\">\n",
        escape(&page.description)
    ));
    out.push_str(&format!("    <title>{}</title>\n", escape(&page.title)));
    for href in &page.font_stylesheets {
        out.push_str(&format!(
            "    <link href=\"{}\" rel=\"stylesheet\">\n",
            escape(href)
        ));
    }
    out.push_str(&format!(
        "    <link rel=\"stylesheet\" href=\"{}\">\n",
        escape(&page.stylesheet)
    ));
    out.push_str("</head>\n");
    out.push_str("<body>\n");

    out.push_str("    <header>\n");
    out.push_str("        <div class=\"container\">\n");
    out.push_str(&format!("            <h1>{}</h1>\n", escape(&page.heading)));
    out.push_str("        </div>\n");
    out.push_str("    </header>\n");
    out.push_str("    \n");

    out.push_str("    <nav>\n");
    out.push_str("        <div class=\"nav-container\">\n");
    out.push_str(
        "            <button class=\"nav-toggle\" onclick=\"toggleNav()\" aria-label=\"Menu\">\n",
    );
    out.push_str("                <span>☰</span> Menu\n");
    out.push_str("            </button>\n");
    out.push_str("            <ul id=\"nav-menu\">\n");
    for section in sections {
        out.push_str(&format!("                <li>{}</li>\n", nav_button(section)));
    }
    out.push_str("            </ul>\n");
    out.push_str("        </div>\n");
    out.push_str("    </nav>\n");
    out.push_str("    \n");

    out.push_str(
        "    <button class=\"back-to-top\" onclick=\"scrollToTop()\" aria-label=\"Voltar ao topo\">\n",
    );
    out.push_str("        ↑\n");
    out.push_str("    </button>\n");
    out.push_str("    \n");
    out.push_str("    <div class=\"alphabet-index\" id=\"alphabet-index\">\n");
    out.push_str("        <!-- Índice será preenchido dinamicamente -->\n");
    out.push_str("    </div>\n");
    out.push_str("    \n");
    out.push_str("    <main>\n");

    out
}

fn nav_button(section: &SectionDescriptor) -> String {
    let class = if section.primary {
        " class=\"active\""
    } else {
        ""
    };
    format!(
        "<button onclick=\"showSection('{id}')\" id=\"btn-{id}\"{class}>{title}</button>",
        id = escape(&section.id),
        class = class,
        title = escape(&section.title),
    )
}

/// Wraps already processed markup in the section container.
pub fn wrap_section(section: &SectionDescriptor, content: &str) -> String {
    let active = if section.primary { " active" } else { "" };
    format!(
        "\n        <section id=\"{id}\" class=\"content-section{active}\">\n            <h2>{title}</h2>\n            {content}\n        </section>\n",
        id = escape(&section.id),
        active = active,
        title = escape(&section.title),
        content = content,
    )
}

/// Footer markup from the closing `</main>` to the end of the document.
pub fn render_footer(page: &PageMeta) -> String {
    let mut out = String::new();

    out.push_str("\n    </main>\n");
    out.push_str("    \n");
    out.push_str("    <footer>\n");
    out.push_str(&format!(
        "        <p><strong>{}</strong></p>\n",
        escape(&page.footer_title)
    ));
    for line in &page.footer_lines {
        out.push_str(&format!("        <p>{}</p>\n", escape(line)));
    }
    out.push_str("    </footer>\n");
    out.push_str("    \n");
    out.push_str(&format!(
        "    <script src=\"{}\"></script>\n",
        escape(&page.script)
    ));
    out.push_str("</body>\n");
    out.push_str("</html>\n");

    out
}

/// Header, the rendered section blocks in order, footer.
pub fn assemble(page: &PageMeta, sections: &[SectionDescriptor], blocks: &[String]) -> String {
    let mut html = render_header(page, sections);
    for block in blocks {
        html.push_str(block);
    }
    html.push_str(&render_footer(page));
    html
}

/// Escapes text taken from configuration for use in markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
