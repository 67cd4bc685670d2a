//! Anesthetics, analgesics and infusion combos.

pub mod combos;
pub mod dexmedetomidine;
pub mod ketamine;
pub mod lidocaine;
pub mod opioids;
pub mod propofol;
