use std::{env, fs, path::Path, process::Command};

fn main() {
    let frontend_dir = Path::new("../frontend");
    let dist_dir = frontend_dir.join("dist");
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    println!("cargo:rerun-if-changed=../frontend/src");
    println!("cargo:rerun-if-changed=../frontend/index.html");
    println!("cargo:rerun-if-changed=../frontend/styles.css");
    println!("cargo:rerun-if-env-changed=SKIP_FRONTEND_BUILD");
    println!("cargo:rerun-if-env-changed=PIN_CODE_LENGTH");

    if env::var_os("SKIP_FRONTEND_BUILD").is_some() {
        println!("cargo:warning=SKIP_FRONTEND_BUILD is set, not building the frontend");
    } else {
        match Command::new("trunk")
            .args(["build", "--release"])
            .current_dir(frontend_dir)
            // nested cargo must not share the outer build lock
            .env("CARGO_TARGET_DIR", Path::new(&out_dir).join("frontend-target"))
            .status()
        {
            Ok(status) if status.success() => {}
            Ok(status) => println!("cargo:warning=trunk build failed with {}", status),
            Err(err) => println!("cargo:warning=Failed to run trunk: {}", err),
        }
    }

    // The embedded asset folder has to exist even without a frontend build
    fs::create_dir_all(&dist_dir).expect("Failed to create frontend dist directory");
}
