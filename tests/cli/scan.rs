use anyhow::Result;

use crate::CliTest;

// Scans require in-cluster credentials; outside a cluster, construction must
// fail fast before any check runs.
#[test]
fn scan_outside_cluster_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".relscan.yaml",
        "checks:\n  - kind: service-annotations\n    spec:\n      key: team\n",
    )?;

    let output = test.run(&["scan"])?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("in-cluster configuration"));
    Ok(())
}

#[test]
fn scan_with_invalid_config_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".relscan.yaml",
        "checks:\n  - kind: nonexistent-check\n    spec: {}\n",
    )?;

    let output = test.run(&["scan"])?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
    Ok(())
}
