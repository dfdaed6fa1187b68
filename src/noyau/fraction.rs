//! Noyau — fractions exactes
//!
//! Deux fractions saisies (numérateur/dénominateur en texte) + un opérateur
//! => une fraction réduite (dénominateur > 0, pgcd(|n|, d) = 1).
//!
//! Lecture des champs :
//! - entier décimal (signe optionnel) => BigInt exact
//! - sinon flottant IEEE-754 (ex: "3.0", "1e3") => accepté seulement s’il est
//!   fini ET entier, puis converti exactement en BigInt
//! - "1.5", "abc", "" => InvalidInput

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, Signed, Zero};
use tracing::debug;

use super::erreurs::FractionError;
use super::operateur::Operateur;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    /// Construit une fraction réduite à partir de n/d quelconques.
    /// - d = 0 => DivisionByZero
    /// - signe porté par le numérateur
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self, FractionError> {
        if denom.is_zero() {
            return Err(FractionError::DivisionByZero);
        }

        let g = pgcd(&numer, &denom);
        if g.is_zero() {
            return Err(FractionError::DivisionByZero);
        }

        let mut n = numer / &g;
        let mut d = denom / &g;
        if d.is_negative() {
            n = -n;
            d = -d;
        }

        Ok(Self { numer: n, denom: d })
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// a op b, avec les formules “croisées” classiques, puis réduction.
    pub fn appliquer(&self, op: Operateur, b: &Fraction) -> Result<Fraction, FractionError> {
        let (n1, d1) = (&self.numer, &self.denom);
        let (n2, d2) = (&b.numer, &b.denom);

        let (n, d) = match op {
            Operateur::Plus => (n1 * d2 + n2 * d1, d1 * d2),
            Operateur::Moins => (n1 * d2 - n2 * d1, d1 * d2),
            Operateur::Fois => (n1 * n2, d1 * d2),
            Operateur::Divise => {
                // diviser par b = multiplier par son inverse : n2 ne doit pas être nul
                if n2.is_zero() {
                    return Err(FractionError::DivisionByZero);
                }
                (n1 * d2, d1 * n2)
            }
        };

        Fraction::new(n, d)
    }

    /// Texte de résultat : "n/d", suivi de " = n" si d = 1.
    pub fn texte(&self) -> String {
        if self.denom.is_one() {
            format!("{self} = {}", self.numer)
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

/// pgcd d’Euclide : pgcd(a, 0) = |a| ; pgcd(a, b) = pgcd(b, a mod b).
pub fn pgcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Lit un champ numérique saisi (voir en-tête du module).
pub fn lire_entier(s: &str) -> Result<BigInt, FractionError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(FractionError::InvalidInput);
    }

    if let Ok(n) = BigInt::from_str(s) {
        return Ok(n);
    }

    let x: f64 = s.parse().map_err(|_| FractionError::InvalidInput)?;
    if !x.is_finite() || x.fract() != 0.0 {
        return Err(FractionError::InvalidInput);
    }
    BigInt::from_f64(x).ok_or(FractionError::InvalidInput)
}

/// API publique : calcule `num1/den1 op num2/den2`.
///
/// Ordre des contrôles : champs (InvalidInput), puis opérateur
/// (UnsupportedOperator), puis l’opération elle-même (DivisionByZero).
pub fn compute_fraction(
    num1: &str,
    den1: &str,
    num2: &str,
    den2: &str,
    op: char,
) -> Result<Fraction, FractionError> {
    let n1 = lire_entier(num1)?;
    let d1 = lire_entier(den1)?;
    let n2 = lire_entier(num2)?;
    let d2 = lire_entier(den2)?;

    if d1.is_zero() || d2.is_zero() {
        return Err(FractionError::InvalidInput);
    }

    let op = Operateur::try_from(op).map_err(|_| FractionError::UnsupportedOperator)?;

    let a = Fraction::new(n1, d1)?;
    let b = Fraction::new(n2, d2)?;
    let r = a.appliquer(op, &b)?;

    debug!(%a, %op, %b, resultat = %r, "fraction calculée");
    Ok(r)
}
