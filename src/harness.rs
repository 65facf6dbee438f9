//! Cross-solver verification harness.
//!
//! Runs every registered solver over a fixed case suite and asserts that
//! each result matches the expected outcome (and therefore every other
//! solver's result). The first divergence aborts the run with an error
//! naming the solver and case — a disagreement means a solver is wrong, and
//! nothing downstream of that is trustworthy.

use thiserror::Error;

use crate::markers::{MarkerSet, MarkerSetError};
use crate::outcome::Segmentation;
use crate::solver::all_solvers;

/// One fixed verification case.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub name: &'static str,
    pub sequence: &'static [u8],
    pub markers: &'static [&'static str],
    pub expected: Segmentation,
}

impl Case {
    /// Build the dictionary for this case.
    pub fn marker_set(&self) -> Result<MarkerSet, MarkerSetError> {
        MarkerSet::new(self.markers)
    }
}

/// Per-case verdict for a successful run.
#[derive(Debug, Clone, Copy)]
pub struct CaseReport {
    pub name: &'static str,
    pub result: Segmentation,
}

/// Fatal harness failures.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A solver disagreed with the expected outcome.
    #[error("solver {solver} diverged on case '{case}': expected {expected}, got {actual}")]
    Divergence {
        solver: &'static str,
        case: &'static str,
        expected: Segmentation,
        actual: Segmentation,
    },
    /// A case carries an invalid dictionary.
    #[error("case '{case}' has an invalid marker set: {source}")]
    InvalidCase {
        case: &'static str,
        source: MarkerSetError,
    },
}

/// The built-in suite: the concrete scenarios from the problem statement
/// plus tiling edge cases around empty inputs, overlapping markers, and
/// prefix-sharing dictionaries.
pub fn builtin_cases() -> Vec<Case> {
    use Segmentation::{Count, Unsegmentable};
    vec![
        Case {
            name: "two_marker_tiling",
            sequence: b"ACGT",
            markers: &["AC", "GT"],
            expected: Count(2),
        },
        Case {
            name: "single_symbol_repeat",
            sequence: b"AAAA",
            markers: &["A"],
            expected: Count(4),
        },
        Case {
            name: "markers_present_but_never_tile",
            sequence: b"ACGT",
            markers: &["AG", "CT"],
            expected: Unsegmentable,
        },
        Case {
            name: "empty_sequence",
            sequence: b"",
            markers: &["A"],
            expected: Count(0),
        },
        Case {
            name: "greedy_long_marker_is_suboptimal",
            sequence: b"ATGCGAT",
            markers: &["ATG", "CGA", "T", "ATGC", "GAT"],
            expected: Count(3),
        },
        Case {
            name: "foreign_alphabet_markers",
            sequence: b"ACGTAC",
            markers: &["XYZ"],
            expected: Unsegmentable,
        },
        Case {
            name: "shared_prefix_dictionary",
            sequence: b"ACGCG",
            markers: &["AC", "CG", "GCG"],
            expected: Count(2),
        },
        Case {
            name: "whole_sequence_marker",
            sequence: b"ACGT",
            markers: &["ACGT"],
            expected: Count(1),
        },
        Case {
            name: "short_markers_beat_doubles",
            sequence: b"AAAA",
            markers: &["A", "AA"],
            expected: Count(4),
        },
        Case {
            name: "three_way_split",
            sequence: b"ATGACGTAG",
            markers: &["ATG", "ACG", "TAG"],
            expected: Count(3),
        },
        Case {
            name: "empty_dictionary",
            sequence: b"ACGTAC",
            markers: &[],
            expected: Unsegmentable,
        },
        Case {
            name: "dead_middle_position",
            sequence: b"ACGA",
            markers: &["AC", "GT"],
            expected: Unsegmentable,
        },
    ]
}

/// Run every solver over every case.
///
/// Returns one report per case on success; halts at the first divergence.
pub fn verify_cases(cases: &[Case]) -> Result<Vec<CaseReport>, VerifyError> {
    let solvers = all_solvers();
    let mut reports = Vec::with_capacity(cases.len());
    for case in cases {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("verify_case", case = case.name);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let markers = case.marker_set().map_err(|source| VerifyError::InvalidCase {
            case: case.name,
            source,
        })?;
        for solver in &solvers {
            let actual = solver.solve(case.sequence, &markers);
            if actual != case.expected {
                return Err(VerifyError::Divergence {
                    solver: solver.name(),
                    case: case.name,
                    expected: case.expected,
                    actual,
                });
            }
        }
        reports.push(CaseReport {
            name: case.name,
            result: case.expected,
        });
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::{builtin_cases, verify_cases, Case, VerifyError};
    use crate::outcome::Segmentation;

    #[test]
    fn builtin_suite_passes_for_all_solvers() {
        let reports = verify_cases(&builtin_cases()).unwrap();
        assert_eq!(reports.len(), builtin_cases().len());
    }

    #[test]
    fn wrong_expectation_names_the_first_solver() {
        let bad = [Case {
            name: "deliberately_wrong",
            sequence: b"ACGT",
            markers: &["AC", "GT"],
            expected: Segmentation::Count(3),
        }];
        match verify_cases(&bad) {
            Err(VerifyError::Divergence { solver, case, actual, .. }) => {
                assert_eq!(solver, "brute_force");
                assert_eq!(case, "deliberately_wrong");
                assert_eq!(actual, Segmentation::Count(2));
            }
            other => panic!("expected divergence, got {other:?}"),
        }
    }
}
