use derive_new::new;
use fake::Fake;
use fake::faker::lorem::en::{Sentence, Word};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
}

/// Writes `files_count` classes with random bodies under `root/package`,
/// returning their names relative to `root`.
pub fn write_generated_package(root: &Path, package: &str, files_count: usize) -> Vec<String> {
    (0..files_count)
        .map(|index| {
            let name = format!("{package}/{}{index}.java", Word().fake::<String>());
            let body = (0..(3..12).fake::<usize>())
                .map(|_| Sentence(2..6).fake::<String>())
                .collect::<Vec<_>>()
                .join("\n");

            write_file(FileSpec::new(root.join(&name), format!("{body}\n")));
            name
        })
        .collect()
}
