use std::fs;

pub fn create_folder_if_not_exists(path: &str) {
    let _ = fs::create_dir_all(path);
}
