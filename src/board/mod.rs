//! Board-level primitives shared by every search branch

/// Row and diagonal attack bookkeeping with exact-inverse undo
pub mod attack;
/// Mirror-symmetry arithmetic over first-column starting rows
pub mod symmetry;
