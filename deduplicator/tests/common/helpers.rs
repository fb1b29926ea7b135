//! Helpers for running the deduplicator against real files

use std::path::{Path, PathBuf};

use deduplicator::{DedupConfig, DedupReport, DedupResult, Deduplicator};
use shared::RealFileSystem;
use tempfile::TempDir;

use super::fixtures::TestFixtures;

pub struct TestHelpers;

#[allow(dead_code)]
impl TestHelpers {
    /// Create a temp dir holding `tokens.txt` with the given content
    pub fn tokens_file(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(TestFixtures::FILE_NAME);
        std::fs::write(&path, content).expect("write fixture");
        (dir, path)
    }

    pub async fn run(config: DedupConfig) -> DedupResult<DedupReport> {
        Deduplicator::new(config, RealFileSystem::new()).run().await
    }

    pub fn read(path: &Path) -> String {
        std::fs::read_to_string(path).expect("read back")
    }
}
