#![allow(dead_code)]

pub mod temp_files {
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Scratch directory holding a spec file; removed when dropped
    pub struct SpecDir {
        pub dir: TempDir,
        pub spec: PathBuf,
    }

    impl SpecDir {
        pub fn out_path(&self) -> PathBuf {
            self.dir.path().join("auth_gen.go")
        }

        pub fn path(&self) -> &Path {
            self.dir.path()
        }
    }

    /// Write `content` to `openapi.<ext>` inside a fresh temp directory
    pub fn create_temp_spec(content: &str, ext: &str) -> SpecDir {
        let dir = tempfile::tempdir().unwrap();
        let spec = dir.path().join(format!("openapi.{ext}"));
        std::fs::write(&spec, content).unwrap();
        SpecDir { dir, spec }
    }

    pub fn create_temp_yaml(content: &str) -> SpecDir {
        create_temp_spec(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> SpecDir {
        create_temp_spec(content, "json")
    }
}

/// Path of the shared sample spec
pub fn fixture_spec() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("openapi.yaml")
}
