use std::path::PathBuf;

/// Read-only collection of resources shipped with the application.
pub trait AssetBundle {
    /// Path of the resource `name.ext`, or `None` if the bundle does not contain it.
    fn resource_path(&self, name: &str, ext: &str) -> Option<PathBuf>;

    /// Like `resource_path`, but a missing resource is a packaging defect and aborts.
    fn require_resource(&self, name: &str, ext: &str) -> PathBuf {
        match self.resource_path(name, ext) {
            Some(path) => path,
            None => panic!("File '{}' not found.", name),
        }
    }
}

/// Bundle backed by a directory on disk, resources are looked up as `<root>/<name>.<ext>`.
#[derive(Debug, Clone)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetBundle for DirectoryBundle {
    fn resource_path(&self, name: &str, ext: &str) -> Option<PathBuf> {
        let path = self.root.join(format!("{}.{}", name, ext));
        if path.is_file() {
            Some(path)
        } else {
            log::debug!("Resource {:?} does not exist", path);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use testdir::testdir;

    use super::{AssetBundle, DirectoryBundle};

    #[rstest]
    fn test_directory_bundle_lookup() {
        let dir = testdir!();
        std::fs::write(dir.join("stations.geojson"), "{}").unwrap();
        let bundle = DirectoryBundle::new(&dir);

        assert_eq!(
            bundle.resource_path("stations", "geojson"),
            Some(dir.join("stations.geojson"))
        );
        assert_eq!(bundle.resource_path("stations", "json"), None);
        assert_eq!(bundle.resource_path("waypoints", "geojson"), None);
    }

    #[rstest]
    fn test_directory_bundle_ignores_directories() {
        let dir = testdir!();
        std::fs::create_dir(dir.join("nested.geojson")).unwrap();
        let bundle = DirectoryBundle::new(&dir);
        assert_eq!(bundle.resource_path("nested", "geojson"), None);
    }

    #[rstest]
    #[should_panic(expected = "File 'pill' not found.")]
    fn test_require_missing_resource_panics() {
        let bundle = DirectoryBundle::new(testdir!());
        bundle.require_resource("pill", "png");
    }
}
