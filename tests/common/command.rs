use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const SCENARIO_REPORT: &str = "* pkg/X.txt\n+ pkg/sub/Y.txt\n";
pub const SCENARIO_X_PATCH: &str = "--- pkg/X.txt\n+++ pkg/X.txt\n@@ -1,3 +1,3 @@\n a\n-b\n+B\n c\n";
pub const SCENARIO_Y_PATCH: &str =
    "--- pkg/sub/Y.txt\n+++ pkg/sub/Y.txt\n@@ -0,0 +1,1 @@\n+hello\n";

pub fn run_verdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("verdiff").expect("Failed to find verdiff binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.env_remove("VERDIFF_FILTERS");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        write_file(FileSpec::new(root.join(path), content.to_string()));
    }
}

#[fixture]
pub fn workbench_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Two trees holding one modified and one added file under `pkg`, plus an
/// unrelated change outside of it.
#[fixture]
pub fn scenario_dir(workbench_dir: TempDir) -> TempDir {
    write_files(
        workbench_dir.path(),
        &[
            ("old/pkg/X.txt", "a\nb\nc\n"),
            ("new/pkg/X.txt", "a\nB\nc\n"),
            ("new/pkg/sub/Y.txt", "hello\n"),
            ("old/other/Z.txt", "before\n"),
            ("new/other/Z.txt", "after\n"),
        ],
    );

    workbench_dir
}

/// A releases directory with decompiled sources of `1.0` and `1.1` for both
/// sides.
#[fixture]
pub fn versions_dir(workbench_dir: TempDir) -> TempDir {
    write_files(
        workbench_dir.path(),
        &[
            ("versions/1.0/decomp/client/net/minecraft/Game.java", "tick();\n"),
            (
                "versions/1.1/decomp/client/net/minecraft/Game.java",
                "tick();\nrender();\n",
            ),
            ("versions/1.0/decomp/client/com/mojang/Blaze.java", "draw();\n"),
            ("versions/1.0/decomp/server/net/minecraft/Game.java", "tick();\n"),
            ("versions/1.1/decomp/server/net/minecraft/Game.java", "tick();\n"),
            ("versions/1.1/decomp/server/com/mojang/Auth.java", "login();\n"),
            ("versions/1.1/decomp/client/net/minecraft/Server.java", "serve();\n"),
            ("versions/1.1/decomp/server/net/minecraft/Server.java", "serve();\nstop();\n"),
        ],
    );

    workbench_dir
}
