//! Tera rendering engine for the landing page.
//!
//! # Templates
//!
//! | Name                             | Section                         |
//! |----------------------------------|---------------------------------|
//! | `page.txt.tera`                  | whole page (includes the rest)  |
//! | `_partials/header.txt.tera`      | event name banner               |
//! | `_partials/hero.txt.tera`        | headline + closing countdown    |
//! | `_partials/register.txt.tera`    | form or closed notice           |
//! | `_partials/footer.txt.tera`      | footer                          |
//!
//! A file under the override directory with the same relative name replaces
//! the embedded template.

use std::collections::HashMap;
use std::path::Path;

use tera::{Context, Tera};

use crate::context::PageContext;
use crate::error::RenderError;

/// Entry template for the whole page.
pub const PAGE_TEMPLATE: &str = "page.txt.tera";

// ---------------------------------------------------------------------------
// Embedded templates: baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    (PAGE_TEMPLATE, include_str!("templates/page.txt.tera")),
    (
        "_partials/header.txt.tera",
        include_str!("templates/_partials/header.txt.tera"),
    ),
    (
        "_partials/hero.txt.tera",
        include_str!("templates/_partials/hero.txt.tera"),
    ),
    (
        "_partials/register.txt.tera",
        include_str!("templates/_partials/register.txt.tera"),
    ),
    (
        "_partials/footer.txt.tera",
        include_str!("templates/_partials/footer.txt.tera"),
    ),
];

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

fn io_at(path: &Path) -> impl FnOnce(std::io::Error) -> RenderError + '_ {
    move |source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// `/`-separated name of a template relative to the override root.
fn template_name(rel: &Path) -> String {
    rel.components()
        .map(|part| part.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Lay every `*.tera` file under `dir` over `templates`, keyed by its path
/// relative to `root`. Other files are ignored.
fn overlay_dir(
    root: &Path,
    dir: &Path,
    templates: &mut HashMap<String, String>,
) -> Result<(), RenderError> {
    for entry in std::fs::read_dir(dir).map_err(io_at(dir))? {
        let path = entry.map_err(io_at(dir))?.path();
        if path.is_dir() {
            overlay_dir(root, &path, templates)?;
            continue;
        }
        if path.extension().map_or(true, |ext| ext != "tera") {
            continue;
        }
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        let contents = std::fs::read_to_string(&path).map_err(io_at(&path))?;
        templates.insert(template_name(rel), contents);
    }
    Ok(())
}

fn build_tera(override_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = TPLS
        .iter()
        .map(|(name, content)| (name.to_string(), content.to_string()))
        .collect();
    if let Some(dir) = override_dir.filter(|dir| dir.is_dir()) {
        overlay_dir(dir, dir, &mut templates)?;
    }

    let mut tera = Tera::default();
    tera.add_raw_templates(templates)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Landing page renderer with the embedded templates loaded.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        Ok(Self {
            tera: build_tera(None)?,
        })
    }

    /// Embedded templates, replaced by any `*.tera` under `dir` with a matching
    /// relative name. A missing `dir` is not an error.
    pub fn with_overrides(dir: &Path) -> Result<Self, RenderError> {
        Ok(Self {
            tera: build_tera(Some(dir))?,
        })
    }

    /// Render the whole page.
    pub fn render_page(&self, ctx: &PageContext) -> Result<String, RenderError> {
        self.render(PAGE_TEMPLATE, ctx)
    }

    /// Render a single named template against `ctx`.
    pub fn render(&self, template: &str, ctx: &PageContext) -> Result<String, RenderError> {
        let context = Context::from_serialize(ctx)?;
        Ok(self.tera.render(template, &context)?)
    }
}
