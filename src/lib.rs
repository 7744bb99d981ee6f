//! # Blog Site Config
//!
//! The site configuration for a static, minimalistic blog template: title,
//! description, author, canonical URL, social-preview image, social links and
//! blog listing settings.
//!
//! The configuration is one immutable `static` value. Layouts, headers and
//! footers read it through [`config::site_config`] and never change it, so it is
//! shared across threads without synchronization.
//!
//! ```
//! use blog_site_config::config::{site_config, Platform};
//!
//! let site = site_config();
//! assert_eq!(site.title, "Nextjs Contentlayer Blog");
//! assert_eq!(site.blog.post_per_page.get(), 10);
//! assert_eq!(
//!     site.socials.get(Platform::Site),
//!     "https://nextjs-contentlayer-blog-demo.vercel.app"
//! );
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | The `SiteConfig` value, read helpers (pagination, link targets, URLs), JSON/TOML codecs |
//! | [`output`] | CLI output formatting: human summary, single values, key listing |
//!
//! # Design Decisions
//!
//! ## Compiled In, Not Loaded
//!
//! There is no config file, no environment override and no reload. The value
//! is a `static` built from string literals, so reading it cannot fail and the
//! binary carries everything it needs.
//!
//! ## Serialized Names Are the Contract
//!
//! Templates reference `siteImage`, `blog.postPerPage` and
//! `blog.openAllExternalLinksInNewTab`. Rust fields are snake_case; serde
//! renames them so JSON and TOML output keep the names templates use.

pub mod config;
pub mod output;
