use std::fs;
use std::path::{Path, PathBuf};

const MAX_FILE_LENGTH: usize = 4000;

/// Walk directory recursively to find all files with specified extensions
fn find_files_with_extensions(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();

            if path.is_dir() {
                // Skip target directory, hidden directories, and C++ source directory
                if let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) {
                    if dir_name == "target"
                        || dir_name.starts_with('.')
                        || dir_name == "CPP"
                        || dir_name == "pkg"
                        || dir_name == "Tests"
                    {
                        continue;
                    }
                }
                files.extend(find_files_with_extensions(&path, extensions));
            } else if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if extensions.contains(&ext) {
                    files.push(path);
                }
            }
        }
    }

    files
}

/// Count lines in a file
fn count_lines_in_file(path: &Path) -> Result<usize, std::io::Error> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().count())
}

/// Test that ensures all source files are under the specified line limit
#[test]
fn test_source_files_line_count_under_limit() {
    let project_root = std::env::current_dir().unwrap();
    let extensions = ["rs", "py", "md"];

    let files = find_files_with_extensions(&project_root, &extensions);
    let mut files_over_limit = Vec::new();

    for file_path in files {
        match count_lines_in_file(&file_path) {
            Ok(line_count) => {
                if line_count > MAX_FILE_LENGTH {
                    files_over_limit.push((file_path.clone(), line_count));
                }

                // Print file info for visibility during tests
                println!("File: {} - Lines: {}", file_path.display(), line_count);
            }
            Err(e) => {
                panic!("Failed to read file {}: {}", file_path.display(), e);
            }
        }
    }

    if !files_over_limit.is_empty() {
        let mut error_message = format!(
            "\nThe following {} file(s) exceed the {}-line limit and should be refactored:\n",
            files_over_limit.len(),
            MAX_FILE_LENGTH
        );

        for (path, lines) in &files_over_limit {
            error_message.push_str(&format!("  - {} ({} lines)\n", path.display(), lines));
        }

        error_message.push_str(&format!(
            "\nConsider breaking large files into smaller modules or functions.\n\
             Files with over {} lines are often harder to maintain and test.\n\
             This is especially important for the Clipper2 implementation which follows\n\
             a zero-tolerance policy for complexity.",
            MAX_FILE_LENGTH
        ));

        panic!("{}", error_message);
    }

    println!(
        "✅ All source files are within the {}-line limit!",
        MAX_FILE_LENGTH
    );
}

/// Test individual file types for more granular feedback
#[test]
fn test_rust_files_line_count() {
    let project_root = std::env::current_dir().unwrap();
    let rust_files = find_files_with_extensions(&project_root, &["rs"]);

    for file_path in rust_files {
        let line_count = count_lines_in_file(&file_path).unwrap();

        assert!(
            line_count <= MAX_FILE_LENGTH,
            "Rust file {} has {} lines, which exceeds the {}-line limit. \
             Consider refactoring into smaller modules. This is critical for the \
             Clipper2 implementation which requires maintainable, focused code.",
            file_path.display(),
            line_count,
            MAX_FILE_LENGTH
        );
    }
}

#[test]
fn test_python_files_line_count() {
    let project_root = std::env::current_dir().unwrap();
    let py_files = find_files_with_extensions(&project_root, &["py"]);

    for file_path in py_files {
        let line_count = count_lines_in_file(&file_path).unwrap();

        assert!(
            line_count <= MAX_FILE_LENGTH,
            "Python file {} has {} lines, which exceeds the {}-line limit. \
             Consider breaking into smaller modules or functions.",
            file_path.display(),
            line_count,
            MAX_FILE_LENGTH
        );
    }
}

#[test]
fn test_markdown_files_line_count() {
    let project_root = std::env::current_dir().unwrap();
    let md_files = find_files_with_extensions(&project_root, &["md"]);

    for file_path in md_files {
        let line_count = count_lines_in_file(&file_path).unwrap();

        assert!(
            line_count <= MAX_FILE_LENGTH,
            "Markdown file {} has {} lines, which exceeds the {}-line limit. \
             Consider splitting into multiple documents for better readability.",
            file_path.display(),
            line_count,
            MAX_FILE_LENGTH
        );
    }
}

/// Test that validates the overall project structure
#[test]
fn test_project_structure_health() {
    let project_root = std::env::current_dir().unwrap();
    let extensions = ["rs", "py", "md"];
    let files = find_files_with_extensions(&project_root, &extensions);

    // Ensure we have files to test
    assert!(!files.is_empty(), "No source files found to validate");

    // Calculate average file length
    let mut total_lines = 0;
    let mut file_count = 0;

    for file_path in &files {
        if let Ok(line_count) = count_lines_in_file(file_path) {
            total_lines += line_count;
            file_count += 1;
        }
    }

    let average_lines = if file_count > 0 {
        total_lines / file_count
    } else {
        0
    };

    println!("📊 Clipper2 Rust Project Statistics:");
    println!("  - Total files analyzed: {}", file_count);
    println!("  - Total lines of code: {}", total_lines);
    println!("  - Average lines per file: {}", average_lines);
    println!("  - Maximum allowed lines per file: {}", MAX_FILE_LENGTH);

    // Optional: Warning if average is getting too high
    if average_lines > MAX_FILE_LENGTH / 2 {
        println!("⚠️  Warning: Average file length ({} lines) is approaching the limit. Consider proactive refactoring.", average_lines);
    }

    // Additional check for Clipper2-specific concerns
    let rust_files: Vec<_> = files
        .iter()
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("rs"))
        .collect();

    println!("🦀 Rust-specific metrics:");
    println!("  - Rust source files: {}", rust_files.len());

    if rust_files.len() > 20 {
        println!("💡 Consider organizing Rust modules into subdirectories as the project grows");
    }
}
