//! Noyau arithmétique Q-sûre
//!
//! Organisation interne :
//! - erreurs.rs   : genres d’erreurs (fractions / expressions)
//! - operateur.rs : + - * /
//! - fraction.rs  : fractions exactes + réduction (pgcd d’Euclide)
//! - lecture.rs   : lecture décimale tronquée d’une fraction
//! - jetons.rs    : filtre + tokenisation
//! - rpn.rs       : descente récursive -> RPN -> pile f64
//! - format.rs    : affichage des résultats flottants
//! - eval.rs      : pipeline complet des expressions

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod fraction;
pub mod jetons;
pub mod lecture;
pub mod operateur;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::eval_expression;
pub use fraction::compute_fraction;
pub use lecture::{lecture_decimale, DIGITS_MAX};
pub use operateur::Operateur;
