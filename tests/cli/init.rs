use anyhow::Result;

use crate::CliTest;

#[test]
fn init_creates_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert!(output.status.success());
    assert!(test.file_exists(".relscan.yaml"));
    let content = test.read_file(".relscan.yaml")?;
    assert!(content.contains("service-annotations"));
    assert!(content.contains("include_annotations"));
    Ok(())
}

#[test]
fn init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".relscan.yaml", "checks: []\n")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));
    // Existing file untouched.
    assert_eq!(test.read_file(".relscan.yaml")?, "checks: []\n");
    Ok(())
}

#[test]
fn no_command_prints_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No command provided"));
    Ok(())
}
