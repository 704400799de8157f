use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{io, markdown_to_html, page};
use std::{path::PathBuf, process};

#[derive(Parser)]
#[command(
    name = "markdown-sitegen",
    version,
    about = "Render a directory of Markdown pages into an HTML template"
)]
struct Cli {
    /// Log every generated and copied file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the whole site
    Build(BuildArgs),

    /// Print the HTML fragment of a single Markdown file
    Render(RenderArgs),

    /// Write a config file with the default paths
    Init(InitArgs),
}

/// Command-line paths override the config file, which overrides defaults.
#[derive(clap::Args, Default)]
struct BuildArgs {
    /// Config file (defaults to ~/.config/markdown-sitegen/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of Markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Static assets copied into the output directory first
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Markdown file to render
    file: PathBuf,
}

#[derive(clap::Args)]
struct InitArgs {
    /// Where to write (defaults to ~/.config/markdown-sitegen/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

impl BuildArgs {
    fn resolve(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from_path(path)?
                .with_context(|| format!("Config file not found: {}", path.display()))?,
            None => {
                let config_path = Config::config_path();
                log::debug!("Config path: {}", config_path.display());
                Config::load()?.unwrap_or_default()
            }
        };
        Ok(self.apply_overrides(config))
    }

    fn apply_overrides(&self, config: Config) -> Config {
        Config {
            content_dir: self.content.clone().unwrap_or(config.content_dir),
            template_path: self.template.clone().unwrap_or(config.template_path),
            output_dir: self.output.clone().unwrap_or(config.output_dir),
            static_dir: self.static_dir.clone().or(config.static_dir),
        }
    }
}

fn build(config: &Config) -> Result<Vec<PathBuf>> {
    if let Some(static_dir) = &config.static_dir {
        let copied = page::copy_static(static_dir, &config.output_dir)
            .context("Failed to copy static files")?;
        log::info!("Copied {} static files", copied.len());
    }

    let written =
        page::generate_pages_recursive(&config.content_dir, &config.template_path, &config.output_dir)
            .context("Failed to generate pages")?;
    log::info!(
        "Generated {} pages into {}",
        written.len(),
        config.output_dir.display()
    );
    Ok(written)
}

fn render(args: &RenderArgs) -> Result<String> {
    let markdown = io::read_path(&args.file)?;
    markdown_to_html(&markdown).with_context(|| format!("Failed to render {}", args.file.display()))
}

fn init(args: &InitArgs) -> Result<PathBuf> {
    let path = args.config.clone().unwrap_or_else(Config::config_path);
    if path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    let config = Config::default();
    match &args.config {
        Some(path) => config.save_to_path(path)?,
        None => config.save()?,
    }
    log::info!("Wrote config to {}", path.display());
    Ok(path)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build(args) => {
            let config = args.resolve()?;
            build(&config)?;
        }
        Command::Render(args) => println!("{}", render(&args)?),
        Command::Init(args) => {
            init(&args)?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(cli) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let args = BuildArgs {
            output: Some(PathBuf::from("docs")),
            static_dir: Some(PathBuf::from("assets")),
            ..BuildArgs::default()
        };
        let config = Config {
            content_dir: PathBuf::from("pages"),
            ..Config::default()
        };

        let resolved = args.apply_overrides(config);

        assert_eq!(resolved.content_dir, PathBuf::from("pages"));
        assert_eq!(resolved.template_path, PathBuf::from("template.html"));
        assert_eq!(resolved.output_dir, PathBuf::from("docs"));
        assert_eq!(resolved.static_dir, Some(PathBuf::from("assets")));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let args = BuildArgs {
            config: Some(dir.path().join("missing.toml")),
            ..BuildArgs::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn builds_site_from_config_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("content/blog")).unwrap();
        fs::create_dir_all(root.join("static")).unwrap();
        fs::write(root.join("content/index.md"), "# Home\n\nWelcome *in*").unwrap();
        fs::write(root.join("content/blog/post.md"), "# Post\n\n1. one").unwrap();
        fs::write(root.join("static/index.css"), "body {}").unwrap();
        fs::write(root.join("template.html"), "<h>{{ Title }}</h>{{ Content }}").unwrap();
        fs::write(
            root.join("sitegen.toml"),
            format!(
                "content_dir = {:?}\ntemplate_path = {:?}\noutput_dir = {:?}\nstatic_dir = {:?}\n",
                root.join("content"),
                root.join("template.html"),
                root.join("public"),
                root.join("static"),
            ),
        )
        .unwrap();

        let args = BuildArgs {
            config: Some(root.join("sitegen.toml")),
            ..BuildArgs::default()
        };
        let written = build(&args.resolve().unwrap()).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(
            fs::read_to_string(root.join("public/index.html")).unwrap(),
            "<h>Home</h><div><h1>Home</h1><p>Welcome <i>in</i></p></div>"
        );
        assert!(root.join("public/blog/post.html").is_file());
        assert!(root.join("public/index.css").is_file());
    }

    #[test]
    fn init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.toml");
        let args = InitArgs {
            config: Some(path.clone()),
            force: false,
        };

        assert_eq!(init(&args).unwrap(), path);

        let loaded = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output_dir = \"docs\"\n").unwrap();

        let mut args = InitArgs {
            config: Some(path.clone()),
            force: false,
        };
        assert!(init(&args).is_err());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "output_dir = \"docs\"\n"
        );

        args.force = true;
        init(&args).unwrap();
        assert_eq!(
            Config::load_from_path(&path).unwrap().unwrap().output_dir,
            PathBuf::from("public")
        );
    }

    #[test]
    fn renders_single_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("page.md");
        fs::write(&file, "Just **one** line").unwrap();

        let html = render(&RenderArgs { file }).unwrap();

        assert_eq!(html, "<div><p>Just <b>one</b> line</p></div>");
    }

    #[test]
    fn render_reports_unclosed_delimiters() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bad.md");
        fs::write(&file, "an `unclosed span").unwrap();

        let err = render(&RenderArgs { file }).unwrap_err();

        assert!(format!("{err:#}").contains("formatted section not closed"));
    }
}
