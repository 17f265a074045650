use std::path::{Component, Path, PathBuf};

/// Resolves a user-supplied fragment against the current directory.
///
/// Absolute fragments come back untouched. Relative ones are joined to `cwd`
/// and normalized lexically, without touching the filesystem.
pub fn resolve(cwd: &Path, fragment: &str) -> PathBuf {
    let p = Path::new(fragment);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        normalize(&cwd.join(p))
    }
}

/// Parent of `cwd`. The parent of the root is the root.
pub fn parent(cwd: &Path) -> PathBuf {
    resolve(cwd, "..")
}

/// Drops `.` segments and folds `..` into the preceding segment.
/// `..` never climbs above the root or a drive prefix.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}
