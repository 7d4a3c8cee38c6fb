use std::env;
use std::fs;
use std::path::Path;

const CONFIG_VARS: &[&str] = &["APP_TITLE", "ENVIRONMENT", "ENABLE_LOGGING", "LOG_LEVEL", "FOOTER_TEXT"];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");
        if let Ok(contents) = fs::read_to_string(env_file) {
            for (key, value) in contents.lines().filter_map(parse_line) {
                // La variable de entorno real tiene prioridad sobre .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default UI settings (APP_TITLE, LOG_LEVEL, ...).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }
}

/// `KEY=VALUE` o `KEY="VALUE"`; comentarios y líneas vacías se ignoran
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}
