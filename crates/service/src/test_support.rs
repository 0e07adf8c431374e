use std::path::PathBuf;

/// Unique scratch file under the system temp dir.
pub fn temp_store(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}_{}.json", prefix, uuid::Uuid::new_v4()))
}

pub async fn cleanup(path: &PathBuf) {
    let _ = tokio::fs::remove_file(path).await;
}
