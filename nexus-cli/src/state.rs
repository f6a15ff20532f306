use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

pub fn nexus_home() -> Result<PathBuf> {
    nexus_home_from(std::env::var_os("HOME"))
}

/// `~/.nexus` for the given `HOME` value. Nothing is created.
pub fn nexus_home_from(home: Option<OsString>) -> Result<PathBuf> {
    let home = home.filter(|h| !h.is_empty()).context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".nexus"))
}

pub fn ensure_nexus_home() -> Result<PathBuf> {
    let dir = nexus_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_resolution_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let home = nexus_home_from(Some(dir.path().as_os_str().to_owned())).unwrap();
        assert_eq!(home, dir.path().join(".nexus"));
        assert!(!home.exists());
    }

    #[test]
    fn test_missing_or_empty_home_is_an_error() {
        assert!(nexus_home_from(None).is_err());
        assert!(nexus_home_from(Some(OsString::new())).is_err());
    }
}
