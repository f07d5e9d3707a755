use std::path::{Component, Path, PathBuf};

const EXTERNAL_PREFIXES: [&str; 4] = ["http://", "https://", "//", "data:"];

pub fn is_external(reference: &str) -> bool {
    let lower = reference.trim().to_ascii_lowercase();
    EXTERNAL_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// External references pass through untouched; anything else becomes a path from the site root.
pub fn resolve_image_ref(reference: &str) -> String {
    let reference = reference.trim();
    if is_external(reference) {
        return reference.to_string();
    }

    let mut rest = reference;
    loop {
        let next = rest.trim_start_matches("./").trim_start_matches('/');
        if next == rest {
            break;
        }
        rest = next;
    }
    format!("/{}", rest)
}

/// Knows which locally served images actually exist, so pages can fall back to text.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    static_dir: PathBuf,
}

impl AssetResolver {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self { static_dir: static_dir.into() }
    }

    /// The resolved reference if it can be shown, `None` when the page should use its fallback.
    pub fn displayable(&self, reference: Option<&str>) -> Option<String> {
        let reference = reference.map(str::trim).filter(|r| !r.is_empty())?;
        let resolved = resolve_image_ref(reference);
        self.is_available(&resolved).then_some(resolved)
    }

    /// External images are assumed reachable; local ones must exist under the static dir.
    pub fn is_available(&self, resolved: &str) -> bool {
        if is_external(resolved) {
            return true;
        }
        match self.local_path(resolved) {
            Some(path) => path.is_file(),
            None => false,
        }
    }

    fn local_path(&self, resolved: &str) -> Option<PathBuf> {
        let relative = Path::new(resolved.trim_start_matches('/'));
        // Only plain segments; `..` would escape the static dir.
        if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
            return None;
        }
        Some(self.static_dir.join(relative))
    }
}
