//! Symbol cancellation
//!
//! Faces are processed left to right, and the symbols of a double face in
//! printed order. Each symbol either cancels one accumulated unit of its
//! opposite or adds a unit of itself.

use crate::core::error::Result;
use crate::dice::face::Face;
use crate::resolution::result::RollResult;

/// Resolve a sequence of faces into net totals
pub fn resolve<'a, I>(faces: I) -> Result<RollResult>
where
    I: IntoIterator<Item = &'a Face>,
{
    let mut result = RollResult::new();
    for face in faces {
        result.add_face(face)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::symbol::Symbol::{self, *};
    use crate::resolution::result::Verdict;

    fn single(symbol: Symbol) -> Face {
        Face::Single(symbol)
    }

    #[test]
    fn test_two_successes() {
        let result = resolve(&[single(Success), single(Success)]).unwrap();
        assert_eq!(result.get(Success), 2);
        assert_eq!(result.get(Failure), 0);
        assert_eq!(result.get(Advantage), 0);
        assert_eq!(result.verdict(), Verdict::Success);
    }

    #[test]
    fn test_each_opposite_pair_nets_zero() {
        for (a, b) in [(Success, Failure), (Failure, Success), (Advantage, Threat), (Threat, Advantage)] {
            let result = resolve(&[single(a), single(b)]).unwrap();
            assert!(result.totals().is_empty(), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_triumph_then_failure() {
        let result = resolve(&[single(Triumph), single(Failure)]).unwrap();
        assert_eq!(result.get(Triumph), 1);
        assert_eq!(result.get(Failure), 0);
        assert_eq!(result.get(Success), 0);
        assert_eq!(result.verdict(), Verdict::Neutral);
    }

    #[test]
    fn test_triumph_matches_success_on_the_success_ledger() {
        let prefixes: [&[Face]; 3] = [
            &[],
            &[single(Failure)],
            &[Face::Double([Failure, Failure]), single(Success)],
        ];

        for prefix in prefixes {
            let with_triumph: Vec<Face> = prefix.iter().copied().chain([single(Triumph)]).collect();
            let with_success: Vec<Face> = prefix.iter().copied().chain([single(Success)]).collect();

            let a = resolve(&with_triumph).unwrap();
            let b = resolve(&with_success).unwrap();

            assert_eq!(a.get(Triumph), b.get(Triumph) + 1);
            assert_eq!(a.get(Success), b.get(Success));
            assert_eq!(a.get(Failure), b.get(Failure));
        }
    }

    #[test]
    fn test_double_faces_stream_in_order() {
        let faces = [
            Face::Double([Success, Advantage]),
            Face::Double([Failure, Threat]),
            Face::Double([Threat, Threat]),
        ];
        let result = resolve(&faces).unwrap();
        assert_eq!(result.get(Success), 0);
        assert_eq!(result.get(Failure), 0);
        assert_eq!(result.get(Advantage), 0);
        assert_eq!(result.get(Threat), 2);
        assert_eq!(result.to_string(), "⎊ ⎊");
    }

    #[test]
    fn test_percentile_bypasses_symbols() {
        let faces = [Face::Number(37), single(Blank), Face::Number(100)];
        let result = resolve(&faces).unwrap();
        assert_eq!(result.percentile(), &[37, 100]);
        assert!(result.totals().is_empty());
        assert_eq!(result.success(), None);
    }

    #[test]
    fn test_empty_sequence() {
        let faces: [Face; 0] = [];
        let result = resolve(&faces).unwrap();
        assert_eq!(result, RollResult::new());
        assert_eq!(result.to_string(), "");
    }
}
