use std::path::PathBuf;

pub fn default_project() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_extract() -> PathBuf {
    PathBuf::from("api-extract.json")
}

pub fn default_output() -> PathBuf {
    PathBuf::from("docs")
}

pub fn default_exclude_private_api() -> bool {
    true
}
