//! The three constant tables of the Verhoeff scheme.
//!
//! `D` is the Cayley table of the dihedral group D5 with its ten elements
//! labelled `0`–`9`, `P` holds the position-dependent permutations (the
//! permutation `σ = (0 1 5 8 9 4 2 7)(3 6)` raised to the power of the row
//! index), and `INV` maps every element to its inverse under `D`.
//!
//! The values are fixed by the published algorithm; changing any entry changes
//! every computed and validated check digit.

/// Multiplication table: `D[a][b]` is `a * b` in D5.
pub const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Permutation table: `P[i % 8][digit]` permutes the digit at position `i`.
pub const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Inverse table: `D[a][INV[a]] == 0` for every `a`.
pub const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Number of distinct rows in [`P`]; the permutation repeats with this period.
pub const PERMUTATION_PERIOD: usize = P.len();
