//! Настройки сервера и расположение артефактов

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Каталог с артефактами рядом с бинарником
pub const ARTIFACTS_DIR: &str = "Niranjans";
pub const REGRESSION_DIR: &str = "Regression Models";
pub const CLASSIFICATION_DIR: &str = "Classification Models";
pub const PREPROCESSING_DIR: &str = "Preprocessing Objects";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: [u8; 4],
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: [0, 0, 0, 0],
            port: 5001,
        }
    }
}

/// `<dir>/Niranjans`, если такой каталог есть, иначе сам `dir`
pub fn base_dir_from(dir: &Path) -> PathBuf {
    let nested = dir.join(ARTIFACTS_DIR);
    if nested.is_dir() {
        nested
    } else {
        dir.to_path_buf()
    }
}

/// Базовый каталог относительно запущенного бинарника
pub fn resolve_base_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(base_dir_from(exe_dir))
}
