use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to find how a `vista_*` crate is reachable
/// from the code a proc-macro emits.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `vista_` and the caller depends on
///    the facade crate `vista`, return `::vista::short_name`
///    (e.g. `vista_reflect` -> `::vista::reflect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to `::crate_name`.
///
/// A crate that derives its own types must add `extern crate self as crate_name;`
/// so that the absolute path also works from inside the crate.
///
/// ```rust
/// # use vista_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vista_reflect"));
/// ```
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "vista";
const CRATE_PREFIX: &str = "vista_";

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn modified_time(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read(path: &Path) -> Document<Box<str>> {
        let source = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(source)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }
        let module = name.strip_prefix(CRATE_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| Self::parse_path(&format!("::{FACADE_NAME}::{module}")))
    }

    /// Returns the path of the package `name` as seen from the caller.
    ///
    /// See the type-level documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|section| match self.manifest.get(section) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }

    /// Runs `func` with the caller's manifest, reading it at most once per
    /// modification of the file.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time =
            Self::modified_time(&path).expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use toml_edit::{Document, Item};

    use super::Manifest;

    fn deps(source: &str) -> toml_edit::Table {
        let doc = Document::parse(source).unwrap();
        match doc.get("dependencies") {
            Some(Item::Table(table)) => table.clone(),
            _ => panic!("missing dependencies table"),
        }
    }

    fn render(path: syn::Path) -> String {
        path.segments
            .iter()
            .map(|s| s.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    #[test]
    fn direct_dependency() {
        let table = deps("[dependencies]\nvista_reflect = \"0.0.1\"\n");
        let path = Manifest::find_in_deps(&table, "vista_reflect").unwrap();
        assert_eq!(render(path), "vista_reflect");
    }

    #[test]
    fn through_facade() {
        let table = deps("[dependencies]\nvista = \"0.0.1\"\n");
        let path = Manifest::find_in_deps(&table, "vista_reflect").unwrap();
        assert_eq!(render(path), "vista::reflect");
    }

    #[test]
    fn unrelated_crate() {
        let table = deps("[dependencies]\nserde = \"1\"\n");
        assert!(Manifest::find_in_deps(&table, "vista_reflect").is_none());
    }
}
