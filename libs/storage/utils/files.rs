use std::{io::Write, path::Path};

pub fn check_path_is_directory(path: &Path) -> eyre::Result<()> {
    if !path.exists() {
        return Err(eyre::eyre!("Directory {:?} doesn't exist", path));
    } else if !path.is_dir() {
        return Err(eyre::eyre!("Path {:?} is not a directory", path));
    }
    Ok(())
}

/// Create directory and all necessary parent directories of a given path
pub fn create_dir_if_not_exists_deep(path: &Path) -> eyre::Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

pub fn read_file_content_if_exist(path: &Path) -> eyre::Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    Ok(Some(std::fs::read_to_string(path)?))
}

/// Write `content` next to `path` then rename it over `path`, readers either
/// see the previous content or the new one.
pub fn write_atomic(path: &Path, content: &str) -> eyre::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| eyre::eyre!("Path {:?} has no parent directory", path))?;

    let mut file = tempfile::NamedTempFile::new_in(parent)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path)
        .map_err(|e| eyre::eyre!("Couldn't write file {:?}: {}", path, e.error))?;
    Ok(())
}
