use std::fs;
use std::path::PathBuf;

use hyakunin_quiz::Poem;
use tempfile::TempDir;

pub fn poem(id: u32) -> Poem {
    Poem {
        id,
        author: format!("歌人 {}", id),
        upper: format!("上の句 {}", id),
        lower: format!("下の句 {}", id),
        reading_upper: format!("かみのく {}", id),
        reading_lower: format!("しものく {}", id),
        description: format!("解説 {}", id),
    }
}

/// A corpus file inside a temp dir that lives as long as the fixture.
#[allow(dead_code)]
pub struct CorpusFile {
    _tmp: TempDir,
    pub path: PathBuf,
}

impl CorpusFile {
    #[allow(dead_code)]
    pub fn new(poems: &[Poem]) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("hyakunin_isshu.json");
        let json = serde_json::to_string_pretty(poems).expect("encode corpus");
        fs::write(&path, json).expect("write corpus");
        Self { _tmp: tmp, path }
    }
}

#[allow(dead_code)]
pub fn bundled_corpus() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("hyakunin_isshu.json")
}
