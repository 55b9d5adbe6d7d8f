mod common;

use std::process::Command;

use common::{scratch_dir, write_grid};

fn tile_concat() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tile_concat"))
}

#[test]
fn wrong_argument_count_prints_usage_and_fails() {
    let output = tile_concat().arg("only_one").output().expect("failed to run binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");

    let output = tile_concat().output().expect("failed to run binary");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn successful_run_exits_zero_and_writes_output() {
    let dir = scratch_dir("cli_success");
    write_grid(&dir, 2, 2, 3, 3);

    let status = tile_concat()
        .arg(&dir)
        .arg("whole.png")
        .status()
        .expect("failed to run binary");
    assert!(status.success());

    let image = image::open(dir.join("whole.png")).expect("open output");
    assert_eq!((image.width(), image.height()), (6, 6));
}

#[test]
fn failed_run_exits_one() {
    let dir = scratch_dir("cli_failure");
    let status = tile_concat()
        .arg(&dir)
        .arg("whole.png")
        .env("RUST_LOG", "off")
        .status()
        .expect("failed to run binary");
    assert_eq!(status.code(), Some(1));
    assert!(!dir.join("whole.png").exists());
}

#[test]
fn huge_coordinate_name_exits_one() {
    let dir = scratch_dir("cli_huge_column");
    write_grid(&dir, 1, 1, 2, 2);
    std::fs::write(dir.join("100000000000000_1.png"), "never decoded").unwrap();

    let status = tile_concat()
        .arg(&dir)
        .arg("whole.png")
        .env("RUST_LOG", "off")
        .status()
        .expect("failed to run binary");
    assert_eq!(status.code(), Some(1));
    assert!(!dir.join("whole.png").exists());
}

#[test]
fn quality_flag_is_used_for_jpeg_output() {
    let dir = scratch_dir("cli_quality");
    write_grid(&dir, 2, 1, 8, 8);

    let status = tile_concat()
        .arg(&dir)
        .arg("whole.jpg")
        .args(["--quality", "50"])
        .status()
        .expect("failed to run binary");
    assert!(status.success());

    let image = image::open(dir.join("whole.jpg")).expect("open output");
    assert_eq!((image.width(), image.height()), (16, 8));
}

#[test]
fn quality_out_of_range_is_rejected() {
    let dir = scratch_dir("cli_quality_range");
    write_grid(&dir, 1, 1, 2, 2);

    for quality in ["0", "101"] {
        let output = tile_concat()
            .arg(&dir)
            .arg("whole.jpg")
            .args(["--quality", quality])
            .output()
            .expect("failed to run binary");
        assert_eq!(output.status.code(), Some(1), "--quality {quality}");
        assert!(!dir.join("whole.jpg").exists());
    }
}
