//! Antimicrobials.

pub mod ceftriaxone;
pub mod cephalexin;
pub mod clindamycin;
pub mod enrofloxacin;
pub mod meropenem;
pub mod metronidazole;
