/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate pretty_assertions;
#[macro_use] extern crate fixla_assert_close;

use std::process::{Command, Output};

fn smoke(envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fixla-smoke"));
    for var in &["FIXLA_VERBOSITY", "FIXLA_LOG_FILE", "FIXLA_LOG_MOD"] {
        cmd.env_remove(var);
    }
    cmd.envs(envs.iter().cloned());
    cmd.output().unwrap()
}

fn parse_vector(line: &str) -> Vec<f32> {
    assert!(line.starts_with('[') && line.ends_with(']'), "{:?}", line);
    line[1..line.len() - 1]
        .split(", ")
        .map(|s| s.parse().unwrap())
        .collect()
}

#[test]
fn prints_a_unit_vector() {
    let output = smoke(&[]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);

    let v = parse_vector(lines[0]);
    assert_eq!(v.len(), 4);
    let magnitude = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert_close!(abs=1e-5, magnitude, 1.0);

    // components keep the ratios of (8, 6, 7, 9)
    let scale = 8.0 / v[0];
    let rescaled: Vec<f32> = v.iter().map(|x| x * scale).collect();
    assert_close!(abs=1e-4, rescaled, vec![8.0, 6.0, 7.0, 9.0]);
}

#[test]
fn verbosity_enables_trace_on_stderr() {
    let output = smoke(&[("FIXLA_VERBOSITY", "1")]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(!stdout.contains("Running smoke check"), "{}", stdout);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Running smoke check"), "{}", stderr);
}

#[test]
fn default_verbosity_hides_trace() {
    let output = smoke(&[]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Running smoke check"), "{}", stderr);
    assert!(stderr.contains("smoke checks passed"), "{}", stderr);
}

#[test]
fn bad_config_fails() {
    let output = smoke(&[("FIXLA_VERBOSITY", "loud")]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stdout, Vec::<u8>::new());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FIXLA_VERBOSITY"), "{}", stderr);
}
