// Storage backend selection: a directory of JSON files natively, window.localStorage on wasm.
// Each opener also returns a one-line description of where the session lives.

use seesaw_core::StorageRes;

#[cfg(not(target_arch = "wasm32"))]
pub fn open_storage(
    cfg: &seesaw_config::GameConfig,
    dir_override: Option<&std::path::Path>,
) -> anyhow::Result<(StorageRes, String)> {
    use anyhow::Context;

    let dir = dir_override
        .map(std::path::Path::to_path_buf)
        .unwrap_or_else(|| std::path::PathBuf::from(&cfg.storage.dir));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating save directory {}", dir.display()))?;
    let location = format!("file storage in {}", dir.display());
    Ok((StorageRes::new(seesaw_sim::FileStorage::new(dir)), location))
}

#[cfg(target_arch = "wasm32")]
pub fn open_storage(
    _cfg: &seesaw_config::GameConfig,
    _dir_override: Option<&std::path::Path>,
) -> anyhow::Result<(StorageRes, String)> {
    Ok((StorageRes::new(web::LocalStorage), "browser localStorage".to_string()))
}

#[cfg(target_arch = "wasm32")]
mod web {
    use seesaw_sim::{Storage, StorageError};

    /// Browser `window.localStorage`. The handle is looked up per call since it is not `Send`.
    pub struct LocalStorage;

    fn backend() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }

    impl Storage for LocalStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            backend()?
                .get_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            backend()?
                .set_item(key, value)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }

        fn erase(&mut self, key: &str) -> Result<(), StorageError> {
            backend()?
                .remove_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
    }
}
