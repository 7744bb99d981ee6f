//! CLI output formatting for the site configuration.
//!
//! # Display
//!
//! The summary leads with the site's identity (title and description), then
//! groups the remaining values the way rendering code consumes them:
//!
//! ```text
//! Nextjs Contentlayer Blog
//!     A static minimalistic blog template powered by Next.js and Contentlayer.
//!     Author: gao-sz
//!     URL: https://nextjs-contentlayer-tailwind.vercel.app
//!     Image: https://nextjs-contentlayer-tailwind.vercel.app/images/announcement-banner.png
//!
//! Socials
//!     github      https://github.com/gao-sz
//!     site        https://nextjs-contentlayer-blog-demo.vercel.app
//!
//! Blog
//!     Posts per page: 10
//!     External links: new tab
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::config::{Platform, SiteConfig};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Width of the platform column, from the longest platform name.
fn platform_width() -> usize {
    Platform::ALL
        .iter()
        .map(|p| p.as_str().len())
        .max()
        .unwrap_or(0)
}

// ============================================================================
// Summary
// ============================================================================

pub fn format_summary(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![
        config.title.to_string(),
        format!("{}{}", indent(1), config.description),
        format!("{}Author: {}", indent(1), config.author),
        format!("{}URL: {}", indent(1), config.url),
        format!("{}Image: {}", indent(1), config.site_image_url()),
        String::new(),
        "Socials".to_string(),
    ];

    let width = platform_width();
    for (platform, url) in config.socials.iter() {
        lines.push(format!(
            "{}{:<width$}    {}",
            indent(1),
            platform.as_str(),
            url
        ));
    }

    lines.push(String::new());
    lines.push("Blog".to_string());
    lines.push(format!(
        "{}Posts per page: {}",
        indent(1),
        config.blog.post_per_page
    ));
    let links = if config.blog.open_all_external_links_in_new_tab {
        "new tab"
    } else {
        "same tab"
    };
    lines.push(format!("{}External links: {}", indent(1), links));

    lines
}

pub fn print_summary(config: &SiteConfig) {
    for line in format_summary(config) {
        println!("{}", line);
    }
}

// ============================================================================
// Single values and key listing
// ============================================================================

/// Format a looked-up value.
///
/// Strings print bare (no JSON quotes) so shell callers can use the output
/// directly; tables print as pretty JSON.
pub fn format_value(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::String(s) => vec![s.clone()],
        serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
            serde_json::to_string_pretty(value)
                .unwrap_or_else(|_| value.to_string())
                .lines()
                .map(str::to_string)
                .collect()
        }
        other => vec![other.to_string()],
    }
}

pub fn print_value(value: &serde_json::Value) {
    for line in format_value(value) {
        println!("{}", line);
    }
}

pub fn print_keys(keys: &[String]) {
    for key in keys {
        println!("{}", key);
    }
}
