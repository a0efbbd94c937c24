use std::path::{Path, PathBuf};

/// Environment variable naming an extra directory searched before the
/// bundled locations.
pub const RESOURCE_DIR_ENV: &str = "TIMELINE_RESOURCE_DIR";

/// Directories searched for bundled resources, in priority order: the
/// override directory, next to the executable, then the crate root when
/// running from a checkout.
fn resource_roots() -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = std::env::var_os(RESOURCE_DIR_ENV)
        .map(PathBuf::from)
        .into_iter()
        .collect();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }
    let manifest_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    if manifest_root.exists() {
        roots.push(manifest_root);
    }
    roots
}

/// First `root.join(path)` that exists. When none does, the path under the
/// first root, so error messages name a sensible location.
fn resolve_in(roots: &[PathBuf], path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    roots
        .iter()
        .map(|root| root.join(path))
        .find(|candidate| candidate.exists())
        .or_else(|| roots.first().map(|root| root.join(path)))
        .unwrap_or_else(|| path.to_path_buf())
}

/// Resolve a settings or dataset path against the resource roots.
pub fn resolve_resource_path(path: &Path) -> PathBuf {
    resolve_in(&resource_roots(), path)
}
