//! Listing pages: the blog index and the main page's recent posts.

use super::{
    PostEntry, SidecarMeta, Templates, presentation::presentations_html, sidecar::meta_tag,
    template,
};
use crate::{config::SiteSectionConfig, utils::html::escape_attr};

pub const NO_POSTS: &str = "<p class=\"no-blogs\">No blog posts yet.</p>";

const DEFAULT_MAIN_OG_TYPE: &str = "website";
const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

/// `{{BLOG_POSTS}}` fragment. Links are relative to the blog root.
pub fn blog_posts_html(entries: &[PostEntry]) -> String {
    entries
        .iter()
        .map(|post| {
            format!(
                "
        <article class=\"blog-post-preview\">
            {}
            <div class=\"blog-content\">
                <h2><a href=\"{}\">{}</a></h2>
                <p class=\"blog-date\">{}</p>
                <p class=\"blog-summary\">{}</p>
            </div>
        </article>",
                thumbnail_html(&post.sidecar, "            "),
                escape_attr(&post.url),
                post.title,
                post.date_display,
                post.summary
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `{{RECENT_BLOGS}}` fragment. Links are relative to the site root.
pub fn recent_posts_html(entries: &[PostEntry]) -> String {
    if entries.is_empty() {
        return NO_POSTS.to_string();
    }

    entries
        .iter()
        .map(|post| {
            format!(
                "      <div class=\"recent-blog-post\">
        {}
        <div class=\"blog-content\">
          <h3><a href=\"{}\">{}</a></h3>
          <p class=\"blog-date\">{}</p>
          <p class=\"blog-summary\">{}</p>
        </div>
      </div>",
                thumbnail_html(&post.sidecar, "        "),
                escape_attr(&post.site_url()),
                post.title,
                post.date_display,
                post.recent_summary
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Thumbnail block, or `""` without a thumbnail image.
fn thumbnail_html(meta: &SidecarMeta, indent: &str) -> String {
    let Some(image) = meta.thumbnail.image.as_deref() else {
        return String::new();
    };
    let alt = meta.thumbnail.alt.as_deref().unwrap_or_default();
    format!(
        "\n{indent}<div class=\"blog-thumbnail\">\n{indent}    <img src=\"{}\" alt=\"{}\" />\n{indent}</div>",
        escape_attr(image),
        escape_attr(alt)
    )
}

/// Fill the blog index template.
pub fn render_blog_index(templates: &Templates, entries: &[PostEntry]) -> String {
    template::render(
        &templates.index,
        &[("BLOG_POSTS", blog_posts_html(entries).as_str())],
    )
}

/// Fill the main page template with the first `limit` entries.
///
/// `None` without a main page template.
pub fn render_main_page(
    templates: &Templates,
    site: &SiteSectionConfig,
    entries: &[PostEntry],
    limit: usize,
) -> Option<String> {
    let main = templates.main.as_deref()?;
    let recent = &entries[..entries.len().min(limit)];
    let meta = &templates.main_meta;
    let title = meta.title.as_deref().unwrap_or(&site.title);

    let recent_html = recent_posts_html(recent);
    let presentations = presentations_html(&templates.presentations);
    let social = social_meta_tags(meta, site);

    Some(template::render(
        main,
        &[
            ("PRESENTATIONS", presentations.as_str()),
            ("RECENT_BLOGS", recent_html.as_str()),
            ("SOCIAL_META_TAGS", social.as_str()),
            ("PAGE_TITLE", title),
        ],
    ))
}

/// `{{SOCIAL_META_TAGS}}` for the main page.
pub fn social_meta_tags(meta: &SidecarMeta, site: &SiteSectionConfig) -> String {
    let title = meta.title.as_deref().unwrap_or(&site.title);
    let description = meta.description.as_deref().unwrap_or_default();
    let og_type = meta.og.kind.as_deref().unwrap_or(DEFAULT_MAIN_OG_TYPE);
    let site_name = meta.og.site_name.as_deref().unwrap_or(title);
    let og_url = meta
        .og
        .url
        .clone()
        .unwrap_or_else(|| site.absolute_url(""));
    let twitter_card = meta.twitter.card.as_deref().unwrap_or(DEFAULT_TWITTER_CARD);
    let resolve = |url: &str| site.absolute_url(url);

    let mut tags = String::from("\n    <meta charset=\"UTF-8\">");
    tags.push_str(&meta_tag("name", "viewport", "width=device-width, initial-scale=1.0"));
    tags.push_str(&meta_tag("name", "description", description));
    tags.push_str("\n\n    <!-- OpenGraph metadata -->");
    tags.push_str(&meta_tag("property", "og:title", title));
    tags.push_str(&meta_tag("property", "og:description", description));
    tags.push_str(&meta_tag("property", "og:type", og_type));
    tags.push_str(&meta_tag("property", "og:url", &og_url));
    tags.push_str(&meta_tag("property", "og:site_name", site_name));
    tags.push_str(&meta.og_image_tags(resolve));
    tags.push_str("\n\n    <!-- Twitter Card metadata -->");
    tags.push_str(&meta_tag("name", "twitter:card", twitter_card));
    tags.push_str(&meta_tag("name", "twitter:title", title));
    tags.push_str(&meta_tag("name", "twitter:description", description));
    tags.push_str(&meta.twitter_image_tag(resolve));
    tags
}
