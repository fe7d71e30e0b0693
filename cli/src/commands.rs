//! Command-line surface: argument parsing and the non-interactive listings.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};

use folio_config::FolioConfig;
use folio_content::ContentStore;
use folio_types::{Project, ProjectStatus};
use folio_tui::{Clipboards, format};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "A terminal portfolio page")]
pub struct Cli {
    /// Config file to use instead of ~/.folio/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Content table to use instead of the built-in one.
    #[arg(long, global = true, value_name = "PATH")]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive page with the typewriter hero (default).
    Hero,
    /// List projects.
    Projects(ProjectsArgs),
    /// Show one project.
    Project {
        slug: String,
        #[arg(long)]
        json: bool,
    },
    /// List work experience.
    Experience {
        #[arg(long)]
        json: bool,
    },
    /// Print every project slug, one per line.
    Slugs,
    /// Copy the contact email to the clipboard.
    CopyEmail,
}

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    /// Only featured projects, at most N.
    #[arg(long, value_name = "N")]
    pub featured: Option<usize>,
    /// Only projects with this status (live, in-progress, coming-soon).
    #[arg(long, value_name = "STATUS")]
    pub status: Option<ProjectStatus>,
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Resolve the effective config: explicit file, then the default
    /// location, then built-in defaults. `--content` wins over `[content]`.
    pub fn resolve_config(&self) -> Result<FolioConfig> {
        let loaded = match &self.config {
            Some(path) => FolioConfig::load_from(path).map(Some),
            None => FolioConfig::load(),
        };
        let mut config = match loaded {
            Ok(config) => config.unwrap_or_default(),
            Err(err) => {
                let path = err.path().display().to_string();
                tracing::debug!(%path, "Rejected config file");
                return Err(anyhow::Error::new(err).context(format!("loading config from {path}")));
            }
        };
        if let Some(path) = &self.content {
            config.content.path = Some(path.clone());
        }
        Ok(config)
    }
}

pub fn select_projects<'a>(store: &'a ContentStore, args: &ProjectsArgs) -> Vec<&'a Project> {
    let mut projects = match args.featured {
        Some(limit) => store.featured_projects(limit),
        None => store.projects().all().iter().collect(),
    };
    if let Some(status) = args.status {
        projects.retain(|project| project.status == status);
    }
    projects
}

/// Run a listing subcommand, writing to `out`.
pub fn run_listing(store: &ContentStore, command: &Command, out: &mut dyn Write) -> Result<()> {
    let text = match command {
        Command::Projects(args) => {
            let projects = select_projects(store, args);
            if args.json {
                format::to_json(&projects)?
            } else {
                format::project_list(&projects)
            }
        }
        Command::Project { slug, json } => {
            let Some(project) = store.project(slug) else {
                bail!("project not found: {slug}");
            };
            if *json {
                format::to_json(project)?
            } else {
                format::project_detail(project)
            }
        }
        Command::Experience { json } => {
            let entries = store.experiences().all();
            if *json {
                format::to_json(entries)?
            } else {
                format::experience_list(entries)
            }
        }
        Command::Slugs => {
            let mut text = store.project_slugs().join("\n");
            text.push('\n');
            text
        }
        Command::Hero | Command::CopyEmail => return Ok(()),
    };
    out.write_all(text.as_bytes())?;
    Ok(())
}

pub fn copy_email(store: &ContentStore) -> Result<()> {
    let email = store.profile().email.as_str();
    let mut clipboards = Clipboards::system();
    let copied = folio_core::copy_with_fallback(
        email,
        clipboards.primary.as_mut(),
        clipboards.fallback.as_mut(),
    );
    if !copied {
        bail!("could not copy {email} to the clipboard");
    }
    writeln!(io::stderr(), "Copied {email}")?;
    Ok(())
}
