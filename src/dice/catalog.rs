//! Static face catalog
//!
//! Face lists for every die kind, built at compile time. Face order
//! follows the physical dice and is kept stable for display.

use super::die::DieKind;
use super::face::Face;
use super::symbol::Symbol;

use super::symbol::Symbol::{
    Advantage as A, Blank as B, Despair as D, Failure as F, Success as S, Threat as T, Triumph as R,
};

const fn one(symbol: Symbol) -> Face {
    Face::Single(symbol)
}

const fn two(first: Symbol, second: Symbol) -> Face {
    Face::Double([first, second])
}

pub const BOOST_FACES: [Face; 6] = [one(B), one(B), one(S), two(S, A), two(A, A), one(A)];

pub const SETBACK_FACES: [Face; 6] = [one(B), one(B), one(F), one(F), one(T), one(T)];

pub const ABILITY_FACES: [Face; 8] = [
    one(B),
    one(S),
    one(S),
    two(S, S),
    one(A),
    one(A),
    two(S, A),
    two(A, A),
];

pub const DIFFICULTY_FACES: [Face; 8] = [
    one(B),
    one(F),
    two(F, F),
    one(T),
    one(T),
    one(T),
    two(T, T),
    two(F, T),
];

pub const PROFICIENCY_FACES: [Face; 12] = [
    one(B),
    one(S),
    one(S),
    two(S, S),
    two(S, S),
    one(A),
    two(S, A),
    two(S, A),
    two(S, A),
    two(A, A),
    two(A, A),
    one(R),
];

pub const CHALLENGE_FACES: [Face; 12] = [
    one(B),
    one(F),
    one(F),
    two(F, F),
    two(F, F),
    one(T),
    one(T),
    two(F, T),
    two(F, T),
    two(T, T),
    two(T, T),
    one(D),
];

pub const PERCENTILE_FACES: [Face; 100] = {
    let mut faces = [Face::Number(1); 100];
    let mut i = 0;
    while i < 100 {
        faces[i] = Face::Number(i as u8 + 1);
        i += 1;
    }
    faces
};

/// Die kinds shown in the face reference table
pub const SYMBOL_DICE: [DieKind; 6] = [
    DieKind::Boost,
    DieKind::Setback,
    DieKind::Ability,
    DieKind::Difficulty,
    DieKind::Proficiency,
    DieKind::Challenge,
];

/// One row of the face reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceRow {
    pub die: DieKind,
    pub faces: Vec<String>,
}

/// Faces of every symbol die, rendered with glyphs
///
/// The percentile die is left out; its faces are just 1 to 100.
pub fn face_table() -> Vec<FaceRow> {
    SYMBOL_DICE
        .iter()
        .map(|die| FaceRow {
            die: *die,
            faces: die.faces().iter().map(|face| face.to_string()).collect(),
        })
        .collect()
}

/// Widest face list in the table (column count)
pub fn max_face_count() -> usize {
    SYMBOL_DICE.iter().map(|die| die.faces().len()).max().unwrap_or(0)
}
