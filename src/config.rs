use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "pwa_icons.txt";
pub const DEFAULT_SOURCE_PATH: &str = "assets/brand_logo.png";
pub const DEFAULT_DEST_DIR: &str = "public/icons";
pub const DEFAULT_MANIFEST_PREFIX: &str = "/icons";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source_path: PathBuf,
    pub dest_dir: PathBuf,
    pub print_manifest: bool,
    pub manifest_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            dest_dir: PathBuf::from(DEFAULT_DEST_DIR),
            print_manifest: false,
            manifest_prefix: DEFAULT_MANIFEST_PREFIX.to_string(),
        }
    }
}

/// Load `./pwa_icons.txt`. No file means the built-in defaults.
pub fn read_config() -> Result<Config, io::Error> {
    read_config_in(Path::new("."))
}

pub fn read_config_in(dir: &Path) -> Result<Config, io::Error> {
    match fs::read_to_string(dir.join(CONFIG_FILE_NAME)) {
        Ok(content) => Ok(parse_config(&content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e),
    }
}

pub fn parse_config(content: &str) -> Config {
    let mut cfg = Config::default();
    for line in content.lines() {
        if let Some((k, v)) = line.split_once('=') {
            let v = v.trim();
            match k.trim() {
                "source_path" if !v.is_empty() => cfg.source_path = PathBuf::from(v),
                "dest_dir" if !v.is_empty() => cfg.dest_dir = PathBuf::from(v),
                "print_manifest" => cfg.print_manifest = v.parse::<u8>().map(|n| n != 0).unwrap_or(false),
                "manifest_prefix" => cfg.manifest_prefix = v.to_string(),
                _ => {}
            }
        }
    }
    cfg
}
