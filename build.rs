use std::{env, process::Command};

struct Bundle {
    feature: &'static str,
    out_name: &'static str,
    target: &'static str,
    dir: &'static str,
    src: &'static str,
}

const BUNDLES: &[Bundle] = &[
    Bundle {
        feature: "app",
        out_name: "air_alert",
        target: "web",
        dir: "aqi-app",
        src: "aqi-app/src",
    },
    // Service workers can't load ES modules everywhere.
    Bundle {
        feature: "worker",
        out_name: "worker",
        target: "no-modules",
        dir: "aqi-worker",
        src: "aqi-worker/src",
    },
];

fn main() {
    let enabled: Vec<_> = BUNDLES
        .iter()
        .filter(|b| env::var(format!("CARGO_FEATURE_{}", b.feature.to_uppercase())).is_ok())
        .collect();

    if !enabled.is_empty() {
        assert_wasm_pack_is_installed();
    }

    for bundle in enabled {
        let status = Command::new("wasm-pack")
            .args([
                "build",
                "--target",
                bundle.target,
                "--release",
                "--out-name",
                bundle.out_name,
                bundle.dir,
            ])
            .status()
            .expect("Unable to successfully execute wasm-pack");
        if !status.success() {
            panic!("wasm-pack failed to build {}", bundle.dir);
        }
        println!("cargo:rerun-if-changed={}", bundle.src);
        for entry in walkdir::WalkDir::new(bundle.src)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            println!("cargo:rerun-if-changed={}", entry.path().display());
        }
    }
}

fn assert_wasm_pack_is_installed() {
    let output = Command::new("cargo")
        .args(["install", "--list"])
        .output()
        .expect("Unable to check wasm-pack installation");
    let installed = String::from_utf8_lossy(&output.stdout);
    if !installed.contains("wasm-pack") {
        Command::new("cargo")
            .args(["install", "wasm-pack"])
            .status()
            .expect("Unable install wasm-pack");
    }
}
