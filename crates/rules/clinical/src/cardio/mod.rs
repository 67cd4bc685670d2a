//! Vasopressors, inotropes, vasodilators and rate-control drugs.

pub mod diltiazem;
pub mod dobutamine;
pub mod dopamine;
pub mod ephedrine;
pub mod esmolol;
pub mod global_vasoactive;
pub mod nitroprusside;
pub mod norepinephrine;
pub mod vasopressin;
