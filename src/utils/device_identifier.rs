use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DEFAULT_DEVICE_NAME: &str = "ARISE Rust SDK";

/// 裝置識別碼：建立 SDK 時解析一次，之後只從記憶體讀取
#[derive(Debug, Clone)]
pub struct DeviceIdentifier {
    id: String,
}

impl DeviceIdentifier {
    /// 從檔案讀取；不存在或格式錯誤時產生 UUID v4 並寫回
    pub fn resolve(path: Option<PathBuf>) -> Self {
        let path = path.as_deref();

        if let Some(id) = path.and_then(read_from_file) {
            tracing::debug!("Retrieved existing device identifier from {:?}", path);
            return Self { id };
        }

        let id = Uuid::new_v4().to_string().to_lowercase();
        tracing::debug!("Generated new device identifier: {}", id);

        match path.map(|path| save_to_file(path, &id)) {
            Some(Ok(())) => tracing::info!("Saved new device identifier"),
            None => {}
            Some(Err(e)) => tracing::warn!(
                "Failed to persist device identifier, using generated ID for this session: {}",
                e
            ),
        }

        Self { id }
    }

    /// 固定使用指定的識別碼 (不讀寫檔案)
    pub fn fixed(id: impl Into<String>) -> Self {
        Self {
            id: id.into().to_lowercase(),
        }
    }

    pub fn get(&self) -> &str {
        &self.id
    }
}

fn read_from_file(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let candidate = content.trim().to_lowercase();

    match Uuid::parse_str(&candidate) {
        Ok(_) => Some(candidate),
        Err(_) => {
            tracing::warn!("Ignoring malformed device identifier in {}", path.display());
            None
        }
    }
}

fn save_to_file(path: &Path, id: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, id)
}

/// 註冊裝置時送出的名稱，取主機名稱
pub fn device_name() -> String {
    sysinfo::System::host_name()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DEVICE_NAME.to_string())
}
