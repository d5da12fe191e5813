use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a workspace crate as seen from the
/// caller's Cargo.toml.
///
/// The derive macros emit absolute paths, and those paths must be valid from
/// the crate that invokes the macro, which may depend on `vt_reflect`
/// directly or only through one of the facade crates.
///
/// # Example
///
/// ```rust
/// # use vt_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vt_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If requested crate name begins with `vt_`, and target crate depends on
///    the facade crate `vt_core`, return `::vt_core::short_name`
///    (e.g. `vt_reflect` -> `::vt_core::reflect`).
/// 3. If the requested crate is `vt_reflect` and the target crate depends on
///    `vt_map`, return `::vt_map::reflect`.
/// 4. Repeat step 1-3 in `dev-dependencies`.
/// 5. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
///
/// When a crate needs to reference itself, library code should use
/// `crate::...`, while doctests and other external code typically use the
/// absolute path `::crate_name`. The crate root therefore carries
/// `extern crate self as vt_reflect;`.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const CORE_NAME: &str = "vt_core";
const MAP_NAME: &str = "vt_map";
const REFLECT_NAME: &str = "vt_reflect";
const PREFIX: &str = "vt_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap()
    }

    fn facade_path(facade: &str, module: &str) -> syn::Path {
        let mut path = Self::parse_str::<syn::Path>(&format!("::{facade}"));
        path.segments.push(Self::parse_str(module));
        path
    }

    #[inline]
    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }

        let module = name.strip_prefix(PREFIX)?;
        if deps.contains_key(CORE_NAME) {
            return Some(Self::facade_path(CORE_NAME, module));
        }
        if name == REFLECT_NAME && deps.contains_key(MAP_NAME) {
            return Some(Self::facade_path(MAP_NAME, module));
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if let Some(Item::Table(deps)) = self.manifest.get("dependencies")
            && let Some(val) = Self::find_in_deps(deps, name)
        {
            return val;
        }

        if let Some(Item::Table(deps)) = self.manifest.get("dev-dependencies")
            && let Some(val) = Self::find_in_deps(deps, name)
        {
            return val;
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Obtain the [Manifest] of the caller's Cargo.toml.
    ///
    /// The parsed manifest is cached per path and invalidated when the file's
    /// modification time changes. Callers should still resolve paths once per
    /// macro invocation.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn path_string(path: &syn::Path) -> String {
        path.segments
            .iter()
            .map(|seg| seg.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: toml_edit::Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nvt_reflect = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("vt_reflect")), "vt_reflect");
    }

    #[test]
    fn through_facades() {
        let m = manifest("[dependencies]\nvt_core = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("vt_reflect")), "vt_core::reflect");

        let m = manifest("[dependencies]\nvt_map = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("vt_reflect")), "vt_map::reflect");
        assert_eq!(path_string(&m.get_crate_path("vt_other")), "vt_other");
    }

    #[test]
    fn dev_dependencies_and_fallback() {
        let m = manifest("[dev-dependencies]\nvt_core = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("vt_reflect")), "vt_core::reflect");

        let m = manifest("[package]\nname = \"x\"\n");
        assert_eq!(path_string(&m.get_crate_path("vt_reflect")), "vt_reflect");
    }
}
