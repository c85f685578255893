#![cfg(unix)]

use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;
use common::images::write_square_image;
use common::{FakePhone, phone};

#[rstest]
fn extract_prints_paths_as_json(phone: FakePhone) -> Result<(), Box<dyn std::error::Error>> {
    let image = write_square_image(phone.path());

    let output = phone
        .command(&["extract", &image.display().to_string(), "--method", "contours"])
        .output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["method"], "contours");
    let paths = report["paths"].as_array().ok_or("paths missing")?;
    assert_eq!(report["path_count"].as_u64(), Some(paths.len() as u64));
    assert!(!paths.is_empty());
    assert!(report["est_time"].as_f64().is_some_and(|t| t > 0.0));

    // extraction never touches the device
    assert!(phone.log().is_empty());

    Ok(())
}

#[rstest]
fn edges_method_reports_its_name(phone: FakePhone) -> Result<(), Box<dyn std::error::Error>> {
    let image = write_square_image(phone.path());

    let output = phone
        .command(&[
            "extract",
            &image.display().to_string(),
            "--method",
            "edges",
            "--simplify",
            "0",
        ])
        .output()?;

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["method"], "edges");

    Ok(())
}
