//! Site configuration module.
//!
//! Holds the one [`SiteConfig`] value the blog template reads: site metadata,
//! social links and blog listing settings. The value is compiled in as a
//! `static` and is never mutated, so any thread can read it without locking.
//!
//! ## Shape
//!
//! Serialized, the configuration looks like this (field names and nesting are
//! what rendering code references, e.g. `socials.site` or `blog.postPerPage`):
//!
//! ```toml
//! title = "Nextjs Contentlayer Blog"
//! description = "A static minimalistic blog template powered by Next.js and Contentlayer."
//! author = "gao-sz"
//! url = "https://nextjs-contentlayer-tailwind.vercel.app"
//! siteImage = "/images/announcement-banner.png"
//!
//! [socials]
//! github = "https://github.com/gao-sz"
//! linkedin = "https://github.com/gao-sz"
//! twitter = "https://github.com/gao-sz"
//! telegram = "https://github.com/gao-sz"
//! email = "https://github.com/gao-sz"
//! site = "https://nextjs-contentlayer-blog-demo.vercel.app"
//!
//! [blog]
//! postPerPage = 10
//! openAllExternalLinksInNewTab = true
//! ```
//!
//! ## Closed Key Set
//!
//! `socials` is a struct with one field per [`Platform`], not a map. Rendering
//! code can't ask for a platform that doesn't exist, and parsing rejects
//! unknown keys anywhere in the tree. `postPerPage` is a [`NonZeroU32`], so a
//! zero page size can't be constructed or parsed.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::num::NonZeroU32;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Unknown config key: {0}")]
    UnknownKey(String),
    #[error("Unknown social platform: {0}")]
    UnknownPlatform(String),
}

/// Site configuration consumed by layouts, headers and footers.
///
/// Text fields are `Cow<'static, str>` so the compiled-in [`SITE_CONFIG`] can
/// borrow string literals while parsed copies own their data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Display name of the site.
    pub title: Cow<'static, str>,
    /// Short summary used for page metadata.
    pub description: Cow<'static, str>,
    /// Attributed author name.
    pub author: Cow<'static, str>,
    /// Canonical site URL.
    pub url: Cow<'static, str>,
    /// Site-relative path to the default social-preview image.
    pub site_image: Cow<'static, str>,
    /// Profile links, one per platform.
    pub socials: Socials,
    /// Blog listing settings.
    pub blog: BlogConfig,
}

/// Social profile links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Socials {
    pub github: Cow<'static, str>,
    pub linkedin: Cow<'static, str>,
    pub twitter: Cow<'static, str>,
    pub telegram: Cow<'static, str>,
    pub email: Cow<'static, str>,
    pub site: Cow<'static, str>,
}

/// Blog listing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlogConfig {
    /// Number of posts on each paginated listing page.
    pub post_per_page: NonZeroU32,
    /// Rendering hint: external links get `target="_blank"`.
    pub open_all_external_links_in_new_tab: bool,
}

const POST_PER_PAGE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(n) => n,
    None => panic!("post_per_page must be non-zero"),
};

const AUTHOR_PROFILE: &str = "https://github.com/gao-sz";

/// The site configuration.
pub static SITE_CONFIG: SiteConfig = SiteConfig {
    title: Cow::Borrowed("Nextjs Contentlayer Blog"),
    description: Cow::Borrowed(
        "A static minimalistic blog template powered by Next.js and Contentlayer.",
    ),
    author: Cow::Borrowed("gao-sz"),
    url: Cow::Borrowed("https://nextjs-contentlayer-tailwind.vercel.app"),
    site_image: Cow::Borrowed("/images/announcement-banner.png"),
    socials: Socials {
        github: Cow::Borrowed(AUTHOR_PROFILE),
        linkedin: Cow::Borrowed(AUTHOR_PROFILE),
        twitter: Cow::Borrowed(AUTHOR_PROFILE),
        telegram: Cow::Borrowed(AUTHOR_PROFILE),
        email: Cow::Borrowed(AUTHOR_PROFILE),
        site: Cow::Borrowed("https://nextjs-contentlayer-blog-demo.vercel.app"),
    },
    blog: BlogConfig {
        post_per_page: POST_PER_PAGE,
        open_all_external_links_in_new_tab: true,
    },
};

/// Read access to [`SITE_CONFIG`].
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

// =============================================================================
// Social platforms
// =============================================================================

/// A social platform with a link in [`Socials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Github,
    Linkedin,
    Twitter,
    Telegram,
    Email,
    Site,
}

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Platform; 6] = [
        Platform::Github,
        Platform::Linkedin,
        Platform::Twitter,
        Platform::Telegram,
        Platform::Email,
        Platform::Site,
    ];

    /// Key under `socials` in serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Github => "github",
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Telegram => "telegram",
            Platform::Email => "email",
            Platform::Site => "site",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownPlatform(s.to_string()))
    }
}

impl Socials {
    pub fn get(&self, platform: Platform) -> &str {
        match platform {
            Platform::Github => &self.github,
            Platform::Linkedin => &self.linkedin,
            Platform::Twitter => &self.twitter,
            Platform::Telegram => &self.telegram,
            Platform::Email => &self.email,
            Platform::Site => &self.site,
        }
    }

    /// `(platform, url)` pairs in [`Platform::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> {
        Platform::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

// =============================================================================
// Blog listing helpers
// =============================================================================

impl BlogConfig {
    /// Number of listing pages needed for `total_posts` posts.
    ///
    /// Zero posts means zero pages; callers that always render a first page
    /// should clamp with `.max(1)`.
    pub fn page_count(&self, total_posts: usize) -> usize {
        total_posts.div_ceil(self.per_page())
    }

    /// Index range into the post list for 1-based `page`.
    ///
    /// Returns `None` for page 0 or any page past the last one.
    pub fn page_bounds(&self, page: usize, total_posts: usize) -> Option<Range<usize>> {
        if page == 0 || page > self.page_count(total_posts) {
            return None;
        }
        let start = (page - 1) * self.per_page();
        let end = start.saturating_add(self.per_page()).min(total_posts);
        Some(start..end)
    }

    /// Value for an anchor's `target` attribute.
    pub fn link_target(&self, is_external: bool) -> Option<&'static str> {
        (is_external && self.open_all_external_links_in_new_tab).then_some("_blank")
    }

    fn per_page(&self) -> usize {
        self.post_per_page.get() as usize
    }
}

// =============================================================================
// URL helpers and key lookup
// =============================================================================

impl SiteConfig {
    /// Join a site-relative path onto the canonical URL.
    pub fn absolute_url(&self, path: &str) -> String {
        let base = self.url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }

    /// Absolute URL of the social-preview image.
    pub fn site_image_url(&self) -> String {
        self.absolute_url(&self.site_image)
    }

    /// Resolve a dotted key such as `socials.site` or `blog.postPerPage`.
    ///
    /// Keys use the serialized field names. A key naming a table returns the
    /// whole table.
    pub fn lookup(&self, key: &str) -> Result<serde_json::Value, ConfigError> {
        let root = serde_json::to_value(self)?;
        let mut current = &root;
        for segment in key.split('.') {
            current = current
                .get(segment)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }
        Ok(current.clone())
    }

    /// Every leaf key in dotted form, sorted within each table.
    ///
    /// The order comes from `serde_json::Map` being a `BTreeMap`; enabling
    /// serde_json's `preserve_order` feature would switch it to field order.
    pub fn keys(&self) -> Result<Vec<String>, ConfigError> {
        let root = serde_json::to_value(self)?;
        let mut keys = Vec::new();
        collect_keys(&root, "", &mut keys);
        Ok(keys)
    }
}

fn collect_keys(value: &serde_json::Value, prefix: &str, out: &mut Vec<String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                collect_keys(child, &key, out);
            }
        }
        _ => out.push(prefix.to_string()),
    }
}

// =============================================================================
// Serialization
// =============================================================================

/// Serialize to pretty-printed JSON.
pub fn to_json(config: &SiteConfig) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Serialize to TOML.
pub fn to_toml(config: &SiteConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string(config)?)
}

/// Parse a JSON document. Unknown keys and a zero `postPerPage` are rejected.
pub fn from_json(content: &str) -> Result<SiteConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a TOML document. Unknown keys and a zero `postPerPage` are rejected.
pub fn from_toml(content: &str) -> Result<SiteConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}
