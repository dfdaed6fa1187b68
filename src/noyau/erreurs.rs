// src/noyau/erreurs.rs
//
// Erreurs du noyau : des GENRES (pas des exceptions).
// Chaque échec remonte comme valeur via Result ; le noyau ne panique jamais.

use thiserror::Error;

/// Échecs du calcul de fractions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
    /// Champ numérique illisible, non entier, ou dénominateur nul.
    #[error("Vérifiez les données saisies")]
    InvalidInput,

    /// Division par une fraction de valeur nulle.
    #[error("division par zéro")]
    DivisionByZero,

    /// Opérateur hors de {+, -, *, /}.
    #[error("opérateur non supporté")]
    UnsupportedOperator,
}

/// Échecs de l’évaluation d’une expression.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionError {
    /// Suite de jetons mal formée : parenthèses, entrée vide, opérateur mal placé.
    #[error("expression invalide")]
    SyntaxError,

    /// Diviseur nul atteint pendant l’évaluation.
    #[error("division par zéro")]
    DivisionByZero,

    /// Littéral numérique mal formé (ex: deux points décimaux) ou hors de la plage f64.
    #[error("nombre mal formé")]
    ParseError,

    /// Résultat intermédiaire hors de la plage f64 (±∞).
    #[error("dépassement de capacité")]
    Overflow,
}
