//! HTML templates, parsed once at startup.
//!
//! The default set is compiled into the binary. Setting `TEMPLATE_DIR`
//! loads files with the same names from disk instead, so pages can be
//! restyled without a rebuild. Either way every page is parsed before the
//! server accepts requests.

use std::path::{Path, PathBuf};

use minijinja::Environment;
use serde::Serialize;

/// Names of every template the handlers render or extend.
pub const TEMPLATE_NAMES: [&str; 5] = [
    "base.html",
    "list.html",
    "view.html",
    "create.html",
    "edit.html",
];

const EMBEDDED: [(&str, &str); 5] = [
    ("base.html", include_str!("../templates/base.html")),
    ("list.html", include_str!("../templates/list.html")),
    ("view.html", include_str!("../templates/view.html")),
    ("create.html", include_str!("../templates/create.html")),
    ("edit.html", include_str!("../templates/edit.html")),
];

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse template: {0}")]
    Syntax(#[from] minijinja::Error),
}

/// Parsed template set. HTML output is auto-escaped.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Templates compiled into the binary.
    pub fn embedded() -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        for (name, source) in EMBEDDED {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Load every name in [`TEMPLATE_NAMES`] from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        for name in TEMPLATE_NAMES {
            let path = dir.join(name);
            let source = std::fs::read_to_string(&path)
                .map_err(|source| TemplateError::Io { path, source })?;
            env.add_template_owned(name, source)?;
        }
        tracing::info!(dir = %dir.display(), "Loaded templates from disk");
        Ok(Self { env })
    }

    /// Render template `name` with `ctx`.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
