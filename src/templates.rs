//! Project file templates
//!
//! Templates are embedded at compile time and written into the
//! generated project tree after the external generators have run. Each
//! template is fixed text with at most one substitution slot,
//! `{{title}}`, filled with the display title derived from the project
//! name. Rendering the same title twice produces byte-identical output.

use std::fs;
use std::path::Path;

use crate::error::ScaffoldError;

mod web_templates {
    pub const THEME_PROVIDER_TSX: &str = include_str!("../resources/web/theme-provider.tsx");
    pub const THEME_TOGGLE_TSX: &str = include_str!("../resources/web/theme-toggle.tsx");
    pub const GLOBAL_NAV_TSX: &str = include_str!("../resources/web/global-nav.tsx");
    pub const LAYOUT_TSX: &str = include_str!("../resources/web/layout.tsx");
    pub const PAGE_TSX: &str = include_str!("../resources/web/page.tsx");
    pub const CONVENTIONS_MD: &str = include_str!("../resources/web/conventions.md");
}

const TITLE_SLOT: &str = "{{title}}";

/// An embedded template and where it lands inside the project tree.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub relative_path: &'static str,
    body: &'static str,
}

impl Template {
    /// Render the template for a given display title.
    pub fn render(&self, title: &str) -> String {
        self.body.replace(TITLE_SLOT, title)
    }
}

/// Every file the scaffolder writes, in write order.
pub const TEMPLATES: [Template; 6] = [
    Template {
        relative_path: "src/components/theme-provider.tsx",
        body: web_templates::THEME_PROVIDER_TSX,
    },
    Template {
        relative_path: "src/components/theme-toggle.tsx",
        body: web_templates::THEME_TOGGLE_TSX,
    },
    Template {
        relative_path: "src/components/global-nav.tsx",
        body: web_templates::GLOBAL_NAV_TSX,
    },
    Template {
        relative_path: "src/app/layout.tsx",
        body: web_templates::LAYOUT_TSX,
    },
    Template {
        relative_path: "src/app/page.tsx",
        body: web_templates::PAGE_TSX,
    },
    Template {
        relative_path: "conventions.md",
        body: web_templates::CONVENTIONS_MD,
    },
];

/// Render and write all templates under `project_root`, overwriting
/// whatever the generator put at those paths.
///
/// Stops at the first failed write; earlier writes are left in place.
pub fn write_all(project_root: &Path, title: &str) -> Result<(), ScaffoldError> {
    for template in &TEMPLATES {
        let path = project_root.join(template.relative_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::TemplateWrite {
                path: path.clone(),
                source,
            })?;
        }

        fs::write(&path, template.render(title))
            .map_err(|source| ScaffoldError::TemplateWrite { path, source })?;

        println!("  ✓ {}", template.relative_path);
    }

    Ok(())
}
