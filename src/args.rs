// Copyright (C) Brian G. Milnes 2025

//! Standard argument handling for the sweep tools
//!
//! Accepts `-d <dir>` options and positional paths. Boolean flags such as
//! `--dry-run` are not consumed here; each tool reads those from the
//! environment itself.

pub mod args {
    use anyhow::Result;
    use std::env;
    use std::path::{Path, PathBuf};
    use walkdir::WalkDir;

    pub struct StandardArgs {
        pub paths: Vec<PathBuf>,
    }

    impl StandardArgs {
        /// Parse `-d <dir>` options and positional paths from the
        /// command line
        pub fn parse() -> Result<Self> {
            let mut paths = Vec::new();
            let mut iter = env::args().skip(1);

            while let Some(arg) = iter.next() {
                if arg == "-d" || arg == "--dir" {
                    match iter.next() {
                        Some(dir) => paths.push(PathBuf::from(dir)),
                        None => {
                            return Err(anyhow::anyhow!("{arg} requires a directory argument"))
                        }
                    }
                } else if !arg.starts_with('-') {
                    paths.push(PathBuf::from(arg));
                }
            }

            Ok(StandardArgs { paths })
        }

        /// Directory all reported paths are made relative to
        pub fn base_dir(&self) -> PathBuf {
            env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        }

        pub fn get_search_dirs(&self) -> Vec<PathBuf> {
            get_search_dirs(&self.paths)
        }
    }

    /// Requested paths, or the conventional src/ and tests/ directories
    /// when none were given
    pub fn get_search_dirs(paths: &[PathBuf]) -> Vec<PathBuf> {
        if !paths.is_empty() {
            return paths.to_vec();
        }

        let defaults = [PathBuf::from("src"), PathBuf::from("tests")];
        let existing: Vec<PathBuf> = defaults.into_iter().filter(|d| d.exists()).collect();

        if existing.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            existing
        }
    }

    /// Collect every .rs file under the given paths, skipping target/
    pub fn find_rust_files(paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in paths {
            if path.is_file() {
                if is_rust_file(path) {
                    files.push(path.clone());
                }
                continue;
            }

            for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
                let entry_path = entry.path();
                if entry_path
                    .components()
                    .any(|c| c.as_os_str() == "target")
                {
                    continue;
                }
                if entry_path.is_file() && is_rust_file(entry_path) {
                    files.push(entry_path.to_path_buf());
                }
            }
        }

        files.sort();
        files.dedup();
        files
    }

    fn is_rust_file(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "rs")
    }

    /// Format a count with thousands separators
    pub fn format_number(n: usize) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }

        out
    }
}
