use blog_site_config::{config, output};
use clap::{Parser, Subcommand, ValueEnum};

/// Serialized output format.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

fn render(config: &config::SiteConfig, format: Format) -> Result<String, config::ConfigError> {
    match format {
        Format::Json => config::to_json(config),
        Format::Toml => config::to_toml(config),
    }
}

#[derive(Parser)]
#[command(name = "blog-site-config")]
#[command(about = "Inspect the blog's site configuration")]
#[command(long_about = "\
Inspect the blog's site configuration

The configuration is compiled into the binary and never changes at runtime.
Keys use the names layouts reference:

  title, description, author, url, siteImage
  socials.{github,linkedin,twitter,telegram,email,site}
  blog.postPerPage, blog.openAllExternalLinksInNewTab

Run 'blog-site-config keys' to list every key.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the configuration (human summary unless --format is given)
    Show {
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Print one value by dotted key, e.g. `socials.site`
    Get { key: String },
    /// List every dotted key
    Keys,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let site = config::site_config();

    match cli.command {
        Command::Show { format: None } => {
            output::print_summary(site);
        }
        Command::Show {
            format: Some(format),
        } => {
            println!("{}", render(site, format)?);
        }
        Command::Get { key } => {
            let value = site.lookup(&key)?;
            output::print_value(&value);
        }
        Command::Keys => {
            output::print_keys(&site.keys()?);
        }
    }

    Ok(())
}
