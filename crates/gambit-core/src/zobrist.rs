//! Zobrist keys for repetition detection.

use crate::color::Color;
use crate::position::Position;

const PIECE_SQUARE_KEYS: usize = 12 * 64;
const SIDE_KEY: usize = PIECE_SQUARE_KEYS;
const CASTLING_KEYS: usize = SIDE_KEY + 1;
const EN_PASSANT_KEYS: usize = CASTLING_KEYS + 16;
const KEY_COUNT: usize = EN_PASSANT_KEYS + 8;

const SEED: u64 = 0x5a4f_4252_4953_5421; // "ZOBRIST!"

/// Xorshift64 PRNG. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

/// Every key in one table: piece-square keys indexed by
/// `piece * 64 + square`, then side to move, castling (by rights bits), and
/// en passant file.
static KEYS: [u64; KEY_COUNT] = {
    let mut table = [0u64; KEY_COUNT];
    let mut state = SEED;
    let mut i = 0;
    while i < KEY_COUNT {
        let (val, next) = xorshift64(state);
        table[i] = val;
        state = next;
        i += 1;
    }
    table
};

/// Hash placement, side to move, castling rights and en passant file.
///
/// Clocks are left out so positions that differ only in move counters
/// compare equal for repetition purposes.
pub(crate) fn hash_position(pos: &Position) -> u64 {
    let mut hash = 0u64;

    for (sq, piece) in pos.board().pieces() {
        hash ^= KEYS[piece.index() * 64 + sq.index()];
    }

    if pos.side_to_move() == Color::Black {
        hash ^= KEYS[SIDE_KEY];
    }

    hash ^= KEYS[CASTLING_KEYS + pos.castling().bits() as usize];

    if let Some(ep) = pos.en_passant() {
        hash ^= KEYS[EN_PASSANT_KEYS + ep.file() as usize];
    }

    hash
}
