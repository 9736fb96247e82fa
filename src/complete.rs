//! Path completion for line editors.

use crate::fs::Namespace;
use crate::path::CanonicalPath;

/// Canonical completions for the partial path token `partial`.
///
/// Directories carry a trailing `/`. A token without `:` or `/` also offers
/// matching device and alias names. Unresolvable bases yield nothing.
pub async fn suggest_paths(namespace: &Namespace, partial: &str, cwd: &CanonicalPath) -> Vec<String> {
    let partial = partial.trim_start();
    let (base, stem) = match partial.rfind(['/', ':']) {
        Some(idx) => (&partial[..=idx], &partial[idx + 1..]),
        None => ("", partial),
    };
    let stem = stem.to_lowercase();

    let mut suggestions = Vec::new();
    if let Ok(dir) = namespace.canonicalize(base, cwd) {
        if let Ok(entries) = namespace.list(&dir).await {
            for entry in entries {
                if !entry.name.to_lowercase().starts_with(&stem) {
                    continue;
                }
                let mut suggestion = dir.join(&entry.name).to_string();
                if entry.is_directory() {
                    suggestion.push('/');
                }
                suggestions.push(suggestion);
            }
        }
    }

    if base.is_empty() {
        let devices = namespace.devices().iter().map(|d| d.name().to_string());
        let aliases = namespace.aliases().iter().map(|(name, _)| name.to_string());
        suggestions.extend(devices.chain(aliases).filter(|name| name.to_lowercase().starts_with(&stem)));
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;

    fn namespace(root: &std::path::Path) -> Namespace {
        ShellConfig::default().with_host_root(root).build_namespace().unwrap()
    }

    #[tokio::test]
    async fn test_suggest_virtual_children() {
        let tmp = tempfile::tempdir().unwrap();
        let ns = namespace(tmp.path());
        let cwd = CanonicalPath::root("SYS:");
        assert_eq!(
            suggest_paths(&ns, "SYS:Prefs/e", &cwd).await,
            vec!["SYS:Prefs/Env/", "SYS:Prefs/Env-Archive/"]
        );
        assert_eq!(suggest_paths(&ns, "S:Start", &cwd).await, vec!["SYS:S/Startup-Sequence"]);
    }

    #[tokio::test]
    async fn test_suggest_relative_includes_devices() {
        let tmp = tempfile::tempdir().unwrap();
        let ns = namespace(tmp.path());
        let cwd = CanonicalPath::root("SYS:");
        let got = suggest_paths(&ns, "d", &cwd).await;
        assert_eq!(got, vec!["SYS:DEVS/", "DH0:", "DEVS:"]);
    }

    #[tokio::test]
    async fn test_suggest_host_listing() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("projects")).unwrap();
        std::fs::write(tmp.path().join("profile.txt"), "x").unwrap();
        let ns = namespace(tmp.path());
        let cwd = CanonicalPath::root("SYS:");
        assert_eq!(
            suggest_paths(&ns, "DH0:pro", &cwd).await,
            vec!["DH0:projects/", "DH0:profile.txt"]
        );
        assert!(suggest_paths(&ns, "XYZ:a", &cwd).await.is_empty());
    }
}
