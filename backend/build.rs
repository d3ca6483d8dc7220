//! Stages the trunk build of the dashboard into `static/`, the default
//! `LEADDESK_STATIC_DIR`. Without a build the server still starts; only the
//! dashboard pages are missing.

use fs_extra::dir::{copy, CopyOptions};
use std::fs;
use std::path::Path;

const DIST_DIR: &str = "../frontend/dist";
const STAGED_DIR: &str = "static";

fn stage(dist: &Path, staged: &Path) -> fs_extra::error::Result<u64> {
    if staged.exists() {
        fs::remove_dir_all(staged)?;
    }
    fs::create_dir_all(staged)?;
    let options = CopyOptions::new().overwrite(true).content_only(true);
    copy(dist, staged, &options)
}

fn main() {
    println!("cargo:rerun-if-changed={}", DIST_DIR);

    let dist = Path::new(DIST_DIR);
    if !dist.join("index.html").is_file() {
        println!(
            "cargo:warning=no dashboard build in {}; run `trunk build` in frontend/",
            DIST_DIR
        );
        return;
    }

    if let Err(e) = stage(dist, Path::new(STAGED_DIR)) {
        panic!("staging {} into {}: {}", DIST_DIR, STAGED_DIR, e);
    }
}
