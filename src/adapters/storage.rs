use crate::domain::model::{AuthenticationResult, StoredCredentials, StoredToken, StoredTtpJwt};
use crate::domain::ports::TokenStorage;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// 儲存內容；檔案版本直接序列化成 JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Vault {
    token: Option<StoredToken>,
    credentials: Option<StoredCredentials>,
    ttp_jwt: Option<StoredTtpJwt>,
}

/// 只存在記憶體中，行程結束即消失
#[derive(Debug, Default)]
pub struct InMemoryTokenStorage {
    vault: Mutex<Vault>,
}

impl InMemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStorage for InMemoryTokenStorage {
    async fn save_token(&self, result: &AuthenticationResult, now: DateTime<Utc>) -> Result<()> {
        self.vault.lock().await.token = Some(StoredToken::from_result(result, now));
        Ok(())
    }

    async fn load_token(&self) -> Result<Option<StoredToken>> {
        Ok(self.vault.lock().await.token.clone())
    }

    async fn clear(&self) -> Result<()> {
        *self.vault.lock().await = Vault::default();
        Ok(())
    }

    async fn save_credentials(&self, credentials: &StoredCredentials) -> Result<()> {
        self.vault.lock().await.credentials = Some(credentials.clone());
        Ok(())
    }

    async fn load_credentials(&self) -> Result<Option<StoredCredentials>> {
        Ok(self.vault.lock().await.credentials.clone())
    }

    async fn save_ttp_jwt(&self, jwt: &StoredTtpJwt) -> Result<()> {
        self.vault.lock().await.ttp_jwt = Some(jwt.clone());
        Ok(())
    }

    async fn load_ttp_jwt(&self) -> Result<Option<StoredTtpJwt>> {
        Ok(self.vault.lock().await.ttp_jwt.clone())
    }

    async fn clear_ttp_jwt(&self) -> Result<()> {
        self.vault.lock().await.ttp_jwt = None;
        Ok(())
    }
}

/// 以單一 JSON 檔保存 token 與憑證，跨行程沿用
#[derive(Debug)]
pub struct FileTokenStorage {
    path: PathBuf,
    // 序列化 read-modify-write
    lock: Mutex<()>,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_vault(&self) -> Result<Vault> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(Vault::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vault::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_vault(&self, vault: &Vault) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let data = serde_json::to_vec_pretty(vault)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }

    async fn update<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Vault) + Send,
    {
        let _guard = self.lock.lock().await;
        let mut vault = self.read_vault().await?;
        apply(&mut vault);
        self.write_vault(&vault).await
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn save_token(&self, result: &AuthenticationResult, now: DateTime<Utc>) -> Result<()> {
        let token = StoredToken::from_result(result, now);
        self.update(move |vault| vault.token = Some(token)).await
    }

    async fn load_token(&self) -> Result<Option<StoredToken>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_vault().await?.token)
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_credentials(&self, credentials: &StoredCredentials) -> Result<()> {
        let credentials = credentials.clone();
        self.update(move |vault| vault.credentials = Some(credentials))
            .await
    }

    async fn load_credentials(&self) -> Result<Option<StoredCredentials>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_vault().await?.credentials)
    }

    async fn save_ttp_jwt(&self, jwt: &StoredTtpJwt) -> Result<()> {
        let jwt = jwt.clone();
        self.update(move |vault| vault.ttp_jwt = Some(jwt)).await
    }

    async fn load_ttp_jwt(&self) -> Result<Option<StoredTtpJwt>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_vault().await?.ttp_jwt)
    }

    async fn clear_ttp_jwt(&self) -> Result<()> {
        self.update(|vault| vault.ttp_jwt = None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn auth_result() -> AuthenticationResult {
        AuthenticationResult {
            access_token: "access".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
            refresh_token: Some("refresh".to_string()),
        }
    }

    #[tokio::test]
    async fn test_in_memory_storage_clear_removes_everything() {
        let storage = InMemoryTokenStorage::new();
        let now = Utc::now();
        storage.save_token(&auth_result(), now).await.unwrap();
        storage
            .save_credentials(&StoredCredentials {
                client_id: "id".to_string(),
                client_secret: "secret".to_string(),
            })
            .await
            .unwrap();

        let token = storage.load_token().await.unwrap().unwrap();
        assert_eq!(token.refresh_token.as_deref(), Some("refresh"));

        storage.clear().await.unwrap();
        assert!(storage.load_token().await.unwrap().is_none());
        assert!(storage.load_credentials().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_storage_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("tokens.json");
        let now = Utc::now();

        let first = FileTokenStorage::new(&path);
        first.save_token(&auth_result(), now).await.unwrap();
        first
            .save_ttp_jwt(&StoredTtpJwt {
                token: "jwt".to_string(),
                expires_at: now,
            })
            .await
            .unwrap();

        let second = FileTokenStorage::new(&path);
        let token = second.load_token().await.unwrap().unwrap();
        assert_eq!(token.access_token, "access");
        assert_eq!(second.load_ttp_jwt().await.unwrap().unwrap().token, "jwt");

        second.clear_ttp_jwt().await.unwrap();
        assert!(second.load_ttp_jwt().await.unwrap().is_none());
        assert!(second.load_token().await.unwrap().is_some());

        second.clear().await.unwrap();
        assert!(!path.exists());
        assert!(second.load_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_storage_rejects_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, b"not json").unwrap();

        let storage = FileTokenStorage::new(&path);
        assert!(storage.load_token().await.is_err());
    }
}
