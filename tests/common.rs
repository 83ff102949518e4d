#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ALL_OFF: &str =
    "111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111";

pub fn dl() -> Command {
    cargo_bin_cmd!("dutylog")
}

/// Unique config path inside the system temp dir, removed if present
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dutylog.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file with the given YAML body and return its path
pub fn write_config(name: &str, yaml: &str) -> String {
    let p = temp_config(name);
    fs::write(&p, yaml).expect("write config");
    p
}

/// All-off encoding with each `(start, end, code)` span painted over it
pub fn encoded_with(spans: &[(usize, usize, char)]) -> String {
    let mut chars: Vec<char> = ALL_OFF.chars().collect();
    for &(start, end, code) in spans {
        for c in &mut chars[start..end] {
            *c = code;
        }
    }
    chars.into_iter().collect()
}
