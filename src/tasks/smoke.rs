/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! A fixed sequence of hand-computed checks against fixla-array-types.
//!
//! This is a quick way to see that a build works at all, not a test suite;
//! the thorough tests live next to the code in fixla-array-types.

use crate::FailResult;

use fixla_array_types::{mat, Matrix22, Vector4};
use std::io::Write;

/// Tolerance on the magnitude of a normalized vector.
const UNIT_TOL: f32 = 1e-6;

/// A computed value differed from its hand-computed expectation.
#[derive(Debug, Fail)]
#[fail(display = "smoke check '{}' failed: got {}, expected {}", check, actual, expected)]
pub struct SmokeCheckFailed {
    pub check: &'static str,
    pub actual: String,
    pub expected: String,
}

struct Check {
    name: &'static str,
    run: fn() -> FailResult<()>,
}

const CHECKS: &[Check] = &[
    Check { name: "Vector4::normalize", run: vector4_normalize },
    Check { name: "Matrix22 add", run: matrix22_add },
    Check { name: "Matrix22 sub", run: matrix22_sub },
    Check { name: "Matrix22::mul_scalar", run: matrix22_mul_scalar },
    Check { name: "Matrix22::det", run: matrix22_det },
    Check { name: "Matrix22::transform", run: matrix22_transform },
];

/// Write the normalized sample vector to `out` (the one line of diagnostic
/// output), then run every check, stopping at the first failure.
pub fn run(out: &mut dyn Write) -> FailResult<()>
{
    writeln!(out, "{}", normalized_sample())?;

    for check in CHECKS {
        trace!("Running smoke check '{}'", check.name);
        (check.run)()?;
        debug!("Smoke check '{}' passed", check.name);
    }
    info!("All {} smoke checks passed", CHECKS.len());
    Ok(())
}

fn normalized_sample() -> Vector4
{ Vector4::new(8.0, 6.0, 7.0, 9.0).normalize() }

fn sample_a() -> Matrix22 { mat::from_array([[0.0, 2.0], [5.0, -1.0]]) }
fn sample_b() -> Matrix22 { mat::from_array([[-3.0, 0.0], [1.0, 4.0]]) }

fn expect_matrix(check: &'static str, actual: Matrix22, expected: [[f32; 2]; 2]) -> FailResult<()>
{
    if actual.into_array() != expected {
        throw!(SmokeCheckFailed {
            check,
            actual: format!("{:?}", actual),
            expected: format!("{:?}", expected),
        });
    }
    Ok(())
}

fn vector4_normalize() -> FailResult<()>
{
    let v = normalized_sample();
    let magnitude = v.magnitude();
    if (magnitude - 1.0).abs() > UNIT_TOL {
        throw!(SmokeCheckFailed {
            check: "Vector4::normalize",
            actual: format!("magnitude {}", magnitude),
            expected: "magnitude 1".into(),
        });
    }

    // same direction as the input
    let rescaled = v.mul_scalar(8.0 / v.v0());
    let expected = Vector4::new(8.0, 6.0, 7.0, 9.0);
    if (rescaled - expected).magnitude() > 1e-4 {
        throw!(SmokeCheckFailed {
            check: "Vector4::normalize",
            actual: format!("direction {}", rescaled),
            expected: format!("direction {}", expected),
        });
    }
    Ok(())
}

fn matrix22_add() -> FailResult<()>
{ expect_matrix("Matrix22 add", sample_a() + sample_b(), [[-3.0, 2.0], [6.0, 3.0]]) }

fn matrix22_sub() -> FailResult<()>
{
    expect_matrix("Matrix22 sub", sample_a() - sample_b(), [[3.0, 2.0], [4.0, -5.0]])?;
    expect_matrix("Matrix22 sub", sample_b() - sample_a(), [[-3.0, -2.0], [-4.0, 5.0]])
}

fn matrix22_mul_scalar() -> FailResult<()>
{ expect_matrix("Matrix22::mul_scalar", sample_a().mul_scalar(4.0), [[0.0, 8.0], [20.0, -4.0]]) }

fn matrix22_det() -> FailResult<()>
{
    let det = sample_a().det();
    if det != -10.0 {
        throw!(SmokeCheckFailed {
            check: "Matrix22::det",
            actual: det.to_string(),
            expected: "-10".into(),
        });
    }
    Ok(())
}

fn matrix22_transform() -> FailResult<()>
{
    let a = mat::from_array([[2.0, 3.0], [1.0, -1.0]]);
    let b = mat::from_array([[-3.0, 1.0], [-2.0, 4.0]]);
    expect_matrix("Matrix22::transform", Matrix22::transform(&a, &b), [[-12.0, 14.0], [-1.0, -3.0]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_check_passes() {
        for check in CHECKS {
            if let Err(e) = (check.run)() {
                panic!("{}: {}", check.name, e);
            }
        }
    }

    #[test]
    fn prints_one_line() {
        let mut out = vec![];
        run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 1);

        let line = lines[0];
        assert!(line.starts_with('[') && line.ends_with(']'), "{:?}", line);
        let parsed: Vec<f32> = {
            line[1..line.len() - 1]
                .split(", ")
                .map(|s| s.parse().unwrap())
                .collect()
        };
        assert_close!(abs=1e-6, parsed, normalized_sample().into_array().to_vec());
    }

    #[test]
    fn mismatch_names_the_check() {
        let err = expect_matrix("demo", sample_a(), [[0.0, 0.0], [0.0, 0.0]]).unwrap_err();
        let failed = err.downcast_ref::<SmokeCheckFailed>().unwrap();
        assert_eq!(failed.check, "demo");
        assert!(err.to_string().contains("smoke check 'demo' failed"));
    }
}
