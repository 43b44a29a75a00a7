//! diff 파일 읽기 포트 구현 어댑터.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::application::ports::DiffSource;

/// workspace의 diff 파일 전체를 메모리로 읽는다(크기 제한 없음).
pub struct WorkspaceDiffSource;

#[async_trait]
impl DiffSource for WorkspaceDiffSource {
    async fn read_diff(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                // 바이너리 파일 조각 등 UTF-8이 아닌 바이트는 대체 문자로 바꾼다.
                tracing::warn!(path = %path.display(), "diff is not valid UTF-8; decoding lossily");
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_diff_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diff.txt");
        let diff = "diff --git a/a.py b/a.py\n+ print('hi')\n- print('hello')\n";
        std::fs::write(&path, diff).unwrap();

        assert_eq!(WorkspaceDiffSource.read_diff(&path).await.unwrap(), diff);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WorkspaceDiffSource
            .read_diff(&dir.path().join("diff.txt"))
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to read"));
    }

    #[tokio::test]
    async fn invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diff.txt");
        std::fs::write(&path, b"+ ok\n+ \xff\n").unwrap();

        let text = WorkspaceDiffSource.read_diff(&path).await.unwrap();
        assert_eq!(text, "+ ok\n+ \u{FFFD}\n");
    }
}
