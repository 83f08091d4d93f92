//! Portfolio page sections, rendered top to bottom in a fixed order.
//!
//! Every section except the project grid reads straight from the [`Portfolio`];
//! the grid renders whatever the filter let through.

use crate::portfolio::{present, Portfolio, Project, ProjectFilter};
use crate::render::{document, encode_component, escape_html, index_href};
use crate::theme::Theme;

pub const NO_RESULTS_MESSAGE: &str = "No projects match your search/filter.";

/// Inputs for one render of the portfolio page.
pub struct PageContext<'a> {
    pub portfolio: &'a Portfolio,
    pub filter: &'a ProjectFilter,
    /// Search text exactly as typed, echoed back into the input.
    pub raw_query: &'a str,
    pub tags: &'a [String],
    pub projects: &'a [&'a Project],
    pub theme: Theme,
    pub year: i32,
}

impl PageContext<'_> {
    /// The current page's path and query, used as the theme toggle's return target.
    fn self_href(&self) -> String {
        index_href(self.raw_query.trim(), &self.filter.tag)
    }
}

pub fn render_portfolio_page(ctx: &PageContext<'_>) -> String {
    let mut body = String::new();
    body.push_str("<div class=\"min-h-screen\">\n");
    body.push_str(&header(ctx));
    body.push_str("<main class=\"mx-auto max-w-6xl px-4\">\n");
    body.push_str(&hero(ctx.portfolio));
    body.push_str(&awards(ctx.portfolio));
    body.push_str(&about(ctx.portfolio));
    body.push_str(&education_experience(ctx.portfolio));
    body.push_str(&controls(ctx));
    body.push_str(&projects(ctx.projects));
    body.push_str(&contact(ctx.portfolio));
    body.push_str("</main>\n");
    body.push_str(&footer(ctx.portfolio, ctx.year));
    body.push_str("</div>");

    document(&ctx.portfolio.profile.name, ctx.theme, &body)
}

fn header(ctx: &PageContext<'_>) -> String {
    let (toggle_label, toggle_icon) = if ctx.theme.is_dark() {
        ("Light", "☀")
    } else {
        ("Dark", "☾")
    };
    format!(
        r##"<header class="sticky top-0">
<div class="flex items-center justify-between">
<span class="font-semibold">{name}</span>
<nav>
<a href="#about">About</a>
<a href="#edu-exp">Education</a>
<a href="#projects">Projects</a>
<a href="#contact">Contact</a>
</nav>
<form method="post" action="/theme">
<input type="hidden" name="redirect" value="{redirect}">
<button type="submit" aria-label="Toggle dark mode">{toggle_icon} <span>{toggle_label}</span></button>
</form>
</div>
</header>
"##,
        name = escape_html(&ctx.portfolio.profile.name),
        redirect = escape_html(&ctx.self_href()),
    )
}

fn hero(portfolio: &Portfolio) -> String {
    let profile = &portfolio.profile;
    let mut out = String::from("<section class=\"hero\">\n<div class=\"space-y-5\">\n");

    if let Some(note) = present(&profile.availability) {
        out.push_str(&format!(
            "<p class=\"availability\">{}</p>\n",
            escape_html(note)
        ));
    }
    out.push_str(&format!(
        "<h1>{}</h1>\n<p class=\"role\">{}</p>\n<p class=\"bio\">{}</p>\n",
        escape_html(&profile.name),
        escape_html(&profile.role),
        escape_html(&profile.bio)
    ));

    out.push_str("<div class=\"socials\">\n");
    for (label, url) in profile.socials.links() {
        out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{label}</a>\n",
            escape_html(url)
        ));
    }
    out.push_str("</div>\n</div>\n");

    if let Some(photo) = present(&profile.photo) {
        out.push_str(&format!(
            "<div class=\"photo\"><img src=\"{}\" alt=\"Profile\"></div>\n",
            escape_html(photo)
        ));
    }
    out.push_str("</section>\n");
    out
}

fn awards(portfolio: &Portfolio) -> String {
    let mut out = String::from("<section id=\"awards\">\n<h2>Awards</h2>\n<div class=\"grid\">\n");
    for award in &portfolio.awards {
        out.push_str(&format!(
            "<div class=\"award\"><div class=\"font-medium\">{}</div><div>{}</div><span class=\"badge\">{}</span></div>\n",
            escape_html(&award.org),
            escape_html(&award.title),
            award.year
        ));
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn about(portfolio: &Portfolio) -> String {
    let profile = &portfolio.profile;
    let mut out = format!(
        "<section id=\"about\">\n<h2>About</h2>\n<p>I’m a {} based in <span class=\"location\">{}</span>. \
         I care about developer experience, robotics, and space design. \
         Below is a selection of my work. Use the search and filters to explore.</p>\n",
        escape_html(&profile.role.to_lowercase()),
        escape_html(&profile.location)
    );
    if !profile.highlights.is_empty() {
        out.push_str("<ul class=\"highlights\">\n");
        for h in &profile.highlights {
            out.push_str(&format!(
                "<li><span class=\"font-medium\">{}:</span> {}</li>\n",
                escape_html(&h.label),
                escape_html(&h.value)
            ));
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</section>\n");
    out
}

fn education_experience(portfolio: &Portfolio) -> String {
    let mut out = String::from("<section id=\"edu-exp\">\n<div class=\"grid md:grid-cols-2\">\n");

    out.push_str("<div>\n<h3>Education</h3>\n<ul>\n");
    for e in &portfolio.education {
        out.push_str(&format!(
            "<li><div class=\"font-medium\">{}</div><div>{}</div><div class=\"text-xs\">{} · {}</div></li>\n",
            escape_html(&e.school),
            escape_html(&e.program),
            escape_html(&e.when),
            escape_html(&e.location)
        ));
    }
    out.push_str("</ul>\n</div>\n");

    out.push_str("<div>\n<h3>Experience</h3>\n<ul>\n");
    for x in &portfolio.experience {
        out.push_str(&format!(
            "<li><div class=\"font-medium\">{} — {}</div><div class=\"text-xs\">{} · {}</div>",
            escape_html(&x.role),
            escape_html(&x.org),
            escape_html(&x.when),
            escape_html(&x.location)
        ));
        if let Some(summary) = present(&x.summary) {
            out.push_str(&format!("<p>{}</p>", escape_html(summary)));
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n</div>\n</div>\n</section>\n");
    out
}

fn controls(ctx: &PageContext<'_>) -> String {
    let active = &ctx.filter.tag;
    let mut out = format!(
        r#"<section class="controls">
<form method="get" action="/#projects">
<input type="text" name="q" value="{q}" placeholder="Search projects…">
<input type="hidden" name="tag" value="{tag}">
</form>
<div class="tags">
"#,
        q = escape_html(ctx.raw_query),
        tag = escape_html(active),
    );

    out.push_str(&chip("All", &index_href(ctx.raw_query.trim(), ""), active.is_empty()));
    for tag in ctx.tags {
        out.push_str(&chip(
            tag,
            &index_href(ctx.raw_query.trim(), tag),
            tag == active,
        ));
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn chip(label: &str, href: &str, active: bool) -> String {
    let current = if active { " aria-current=\"true\"" } else { "" };
    format!(
        "<a class=\"chip\" href=\"{}#projects\"{current}>{}</a>\n",
        escape_html(href),
        escape_html(label)
    )
}

fn projects(projects: &[&Project]) -> String {
    let mut out = String::from("<section id=\"projects\">\n<h2>Projects</h2>\n");
    if projects.is_empty() {
        out.push_str(&format!("<p class=\"empty\">{NO_RESULTS_MESSAGE}</p>\n"));
    } else {
        out.push_str("<div class=\"grid\">\n");
        for project in projects {
            out.push_str(&project_card(project));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
    out
}

fn project_card(project: &Project) -> String {
    let mut out = String::from("<article class=\"project\">\n<div class=\"thumb\">");
    match present(&project.image) {
        Some(image) => out.push_str(&format!("<img src=\"{}\" alt=\"\">", escape_html(image))),
        None => out.push_str("<div class=\"no-image\">No image</div>"),
    }
    out.push_str("</div>\n");

    out.push_str(&format!(
        "<div class=\"flex\"><h3>{}</h3><span class=\"badge\">{}</span></div>\n<p>{}</p>\n",
        escape_html(&project.title),
        project.year,
        escape_html(&project.summary)
    ));

    out.push_str("<div class=\"chips\">");
    for t in &project.tech {
        out.push_str(&format!("<span class=\"badge\">{}</span>", escape_html(t)));
    }
    out.push_str("</div>\n<div class=\"links\">");
    if let Some(repo) = present(&project.links.repo) {
        out.push_str(&format!("<a href=\"{}\">Code</a>", escape_html(repo)));
    }
    if let Some(docs) = present(&project.links.docs) {
        out.push_str(&format!(
            "<a href=\"/viewer?file={}\">Docs</a>",
            escape_html(&encode_component(docs))
        ));
    }
    out.push_str("</div>\n</article>\n");
    out
}

fn contact(portfolio: &Portfolio) -> String {
    let profile = &portfolio.profile;
    let email = escape_html(&profile.email);
    let mut out = format!(
        "<section id=\"contact\">\n<h2>Contact</h2>\n\
         <p>Want to collaborate or have a role I’d be a fit for? Send me a proposal.</p>\n\
         <div class=\"links\">\n<a href=\"mailto:{email}\">{email}</a>\n"
    );
    if let Some(site) = present(&profile.socials.website) {
        out.push_str(&format!("<a href=\"{}\">Portfolio</a>\n", escape_html(site)));
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn footer(portfolio: &Portfolio, year: i32) -> String {
    format!(
        "<footer>© {year} {}.</footer>\n",
        escape_html(&portfolio.profile.name)
    )
}
