#![cfg(unix)]

use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::images::write_square_image;
use common::{FakePhone, offline_phone, phone};

#[rstest]
fn missing_image_is_reported(phone: FakePhone) {
    phone
        .command(&["draw", "does-not-exist.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image not found"));

    assert!(phone.swipes().is_empty());
}

#[rstest]
fn preview_mode_writes_the_preview_without_drawing(phone: FakePhone) {
    let image = write_square_image(phone.path());

    phone
        .command(&["draw", &image.display().to_string(), "--preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Auto-selected method: contours"))
        .stdout(predicate::str::contains("Preview saved to"))
        .stdout(predicate::str::contains("Preview only mode - not drawing"));

    assert!(phone.path().join("draw_preview.png").exists());
    assert!(phone.swipes().is_empty());
}

#[rstest]
fn image_is_drawn_inside_the_area(phone: FakePhone) {
    let image = write_square_image(phone.path());

    phone
        .fast_command(&["draw", &image.display().to_string(), "--method", "contours"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drawing area:"))
        .stdout(predicate::str::contains("Complete!"));

    let swipes = phone.swipes();
    assert!(!swipes.is_empty());
    // default image stroke duration
    assert!(swipes.iter().all(|s| s.ends_with(" 60")));
    assert!(phone.log().contains("devices"));
}

#[rstest]
fn drawing_needs_a_connected_device(offline_phone: FakePhone) {
    let image = write_square_image(offline_phone.path());

    offline_phone
        .command(&["draw", &image.display().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No ADB device connected"));

    assert!(offline_phone.swipes().is_empty());
    assert!(offline_phone.path().join("draw_preview.png").exists());
}

#[rstest]
fn unknown_method_is_rejected(phone: FakePhone) {
    let image = write_square_image(phone.path());

    phone
        .command(&["draw", &image.display().to_string(), "--method", "magic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'magic'"));
}
