// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::prelude::*;
use image::Pixel;
use predicates::prelude::*;
use std::process::Command;

fn stars() -> Command {
    Command::cargo_bin("stars").unwrap()
}

#[test]
fn renders_a_finished_fractal() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("stars.png");
    stars()
        .args(&["-c", "5", "-d", "2", "-s", "200x200", "-o"])
        .arg(&output)
        .assert()
        .success();
    let image = image::open(&output).unwrap().to_rgb();
    assert_eq!(image.dimensions(), (200, 200));
    assert!(image.pixels().any(|p| p.channels() != [0, 0, 0]));
}

#[test]
fn writes_one_snapshot_per_drawn_star() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("stars.png");
    let frames = dir.path().join("frames");
    stars()
        .args(&["-c", "3", "-d", "3", "-s", "100x100", "-t", "1", "-o"])
        .arg(&output)
        .arg("--frames")
        .arg(&frames)
        .assert()
        .success();
    let count = std::fs::read_dir(&frames).unwrap().count();
    assert_eq!(count, 1 + 3 + 9);
    assert!(frames.join("frame-000013.png").exists());
}

#[test]
fn stop_after_limits_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("stars.png");
    let frames = dir.path().join("frames");
    stars()
        .args(&["-c", "4", "-d", "4", "-s", "100x100", "--stop-after", "4", "-o"])
        .arg(&output)
        .arg("--frames")
        .arg(&frames)
        .assert()
        .success();
    assert_eq!(std::fs::read_dir(&frames).unwrap().count(), 4);
    assert!(output.exists());
}

#[test]
fn rejects_too_few_corners() {
    let dir = tempfile::tempdir().unwrap();
    stars()
        .args(&["-c", "2", "-d", "2", "-o"])
        .arg(dir.path().join("never.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corner count must be between 3 and 64"));
}

#[test]
fn rejects_shrink_outside_unit_interval() {
    let dir = tempfile::tempdir().unwrap();
    stars()
        .args(&["-c", "5", "-d", "2", "--shrink", "1.5", "-o"])
        .arg(dir.path().join("never.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Shrink factor"));
}

#[test]
fn reports_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    stars()
        .args(&["-c", "5", "-d", "1", "-s", "50x50", "-o"])
        .arg(dir.path().join("missing").join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
}

#[test]
fn rejects_runs_too_large_to_finish() {
    let dir = tempfile::tempdir().unwrap();
    stars()
        .args(&["-c", "64", "-d", "10", "-o"])
        .arg(dir.path().join("never.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"))
        .stderr(predicate::str::contains("more than 2000000 stars"));
    assert!(!dir.path().join("never.png").exists());
}

#[test]
fn accepts_wide_shallow_runs() {
    // 1 + 64 + 64^2 = 4161 stars.
    let dir = tempfile::tempdir().unwrap();
    stars()
        .args(&["-c", "64", "-d", "3", "-s", "50x50", "-o"])
        .arg(dir.path().join("ok.png"))
        .assert()
        .success();
}
