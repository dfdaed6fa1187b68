// src/noyau/lecture.rs
//
// Lecture décimale tronquée d’une fraction exacte (aucun flottant).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

use super::fraction::Fraction;

/// Garde-fou : précision maximale de lecture (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

/// 10^n ; n est déjà borné par DIGITS_MAX.
fn pow10(n: usize) -> BigInt {
    let n = u32::try_from(n.min(DIGITS_MAX)).unwrap_or(0);
    BigInt::from(10).pow(n)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;
    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let frac = frac_part.to_str_radix(10);
    format!("{signe}{int_part}.{frac:0>digits$}")
}

/// r -> r × 10^digits, tronqué vers zéro.
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    (r * BigRational::from_integer(pow10(digits))).trunc().to_integer()
}

/// Lecture décimale de `f` avec exactement `digits` chiffres après la virgule.
/// Ex: 1/3, 5 => "0.33333" ; -7/2, 0 => "-3"
/// Au-delà de DIGITS_MAX, la précision est ramenée à DIGITS_MAX.
pub fn lecture_decimale(f: &Fraction, digits: usize) -> String {
    let digits = digits.min(DIGITS_MAX);
    let r = BigRational::new(f.numer().clone(), f.denom().clone());
    scaled_to_decimal(rational_scaled(&r, digits), digits)
}
