//! Page generation: Markdown files rendered into an HTML template.

use std::path::{Path, PathBuf};

use crate::{
    blocks::{MarkdownError, markdown_to_html},
    io::{self, IoError},
};

/// Replaced by the page title in the template.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Replaced by the rendered page body in the template.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

const TITLE_MARKER: char = '#';

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to render {}: {source}", path.display())]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },
    #[error("No title found: expected a `# ` heading")]
    NoTitle,
}

/// Returns the text of the first level-one heading.
///
/// # Errors
/// [`PageError::NoTitle`] when no line starts with a single `#`.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    markdown
        .lines()
        .find(|line| line.starts_with(TITLE_MARKER) && !line.starts_with("##"))
        .map(|line| line.replace(TITLE_MARKER, "").trim().to_string())
        .ok_or(PageError::NoTitle)
}

/// Substitutes the title and rendered body into `template`.
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Renders `markdown` into `template`. `from` names the source in errors.
fn render_page(markdown: &str, template: &str, from: &Path) -> Result<String, PageError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown).map_err(|source| PageError::Markdown {
        path: from.to_path_buf(),
        source,
    })?;
    Ok(fill_template(template, &title, &content))
}

/// Renders the Markdown file `from` through `template_path` into `dest`.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<(), PageError> {
    log::info!(
        "Generating page {} using {} -> {}",
        from.display(),
        template_path.display(),
        dest.display()
    );

    let markdown = io::read_path(from)?;
    let template = io::read_path(template_path)?;
    io::write_path(dest, &render_page(&markdown, &template, from)?)?;
    Ok(())
}

/// Generates a page for every `.md` file below `content_dir`, mirroring the
/// directory layout under `dest_dir` with `.html` extensions.
///
/// Returns the written paths, sorted.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, PageError> {
    let sources = io::scan_markdown_files(content_dir)?;
    log::debug!(
        "Found {} markdown files in {}",
        sources.len(),
        content_dir.display()
    );
    let template = io::read_path(template_path)?;

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let dest = source.with_extension("html");
        log::info!("Generating page {source} -> {dest}");

        let markdown = io::read_file(&source, content_dir)?;
        let html = render_page(&markdown, &template, &source.to_path(content_dir))?;
        io::write_file(&dest, dest_dir, &html)?;
        written.push(dest.to_path(dest_dir));
    }
    Ok(written)
}

/// Replaces `dest` with a copy of the static assets in `src`.
pub fn copy_static(src: &Path, dest: &Path) -> Result<Vec<PathBuf>, PageError> {
    log::info!("Copying static files {} -> {}", src.display(), dest.display());
    Ok(io::copy_dir_recursive(src, dest)?)
}
