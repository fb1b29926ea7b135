//! Helpers for building directory trees and running the normalizer

use std::path::{Path, PathBuf};

use normalizer::{AddressNormalizer, NormalizerConfig, NormalizerResult};
use shared::{RealFileSystem, RunReport};
use tempfile::TempDir;

pub struct TestHelpers;

#[allow(dead_code)]
impl TestHelpers {
    /// Build a temp tree from (relative path, content) pairs
    pub fn tree(files: &[(&str, &[u8])]) -> TempDir {
        let dir = TempDir::new().expect("create temp dir");
        for (relative, content) in files {
            let path = dir.path().join(relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("create parent");
            }
            std::fs::write(&path, content).expect("write fixture");
        }
        dir
    }

    pub async fn run(config: NormalizerConfig) -> NormalizerResult<RunReport> {
        AddressNormalizer::new(config, RealFileSystem::new())?.run().await
    }

    pub fn read(dir: &TempDir, relative: &str) -> String {
        std::fs::read_to_string(dir.path().join(relative)).expect("read back")
    }

    /// Modified paths relative to the temp root, with `/` separators
    pub fn modified(report: &RunReport, dir: &TempDir) -> Vec<String> {
        report
            .modified()
            .map(|p| Self::relative(p, dir.path()))
            .collect()
    }

    pub fn relative(path: &Path, root: &Path) -> String {
        path.strip_prefix(root)
            .map(PathBuf::from)
            .unwrap_or_else(|_| path.to_path_buf())
            .to_string_lossy()
            .replace('\\', "/")
    }
}
