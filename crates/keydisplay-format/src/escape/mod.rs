mod charmap;
mod classify;
mod codes;
mod repr;

pub use charmap::{fish_literal, readline_literal};
pub use classify::{fish_char, readline_char};
pub use repr::repr_escape;
