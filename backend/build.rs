use std::fs;
use std::path::Path;

// Embeds the trunk build of the frontend when one exists; otherwise the
// checked-in placeholder under static/dist is served.
fn main() {
    let static_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.join("index.html").exists() {
        let _ = fs::remove_dir_all(static_dir);
        fs::create_dir_all(static_dir).expect("create static dir");
        let options = fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true);
        fs_extra::dir::copy(dist_dir, static_dir, &options).expect("copy frontend dist");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
