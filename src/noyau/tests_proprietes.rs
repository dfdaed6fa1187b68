//! Tests de propriétés : fractions + expressions.
//!
//! - RNG déterministe (seed fixe), comme tests_fuzz_safe.rs
//! - a + b - b == a (forme réduite)
//! - tout succès est réduit, dénominateur > 0
//! - évaluer le texte d’un résultat redonne la même valeur

use num_bigint::BigInt;
use num_traits::{One, Signed};

use super::erreurs::FractionError;
use super::format::format_nombre;
use super::fraction::pgcd;
use super::{compute_fraction, eval_expression};

struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    /// entier dans [-m, m]
    fn entier(&mut self, m: i64) -> i64 {
        (self.next_u32() as i64 % (2 * m + 1)) - m
    }
    /// entier non nul dans [-m, m]
    fn non_nul(&mut self, m: i64) -> i64 {
        loop {
            let v = self.entier(m);
            if v != 0 {
                return v;
            }
        }
    }
}

fn assert_reduite(n: &BigInt, d: &BigInt) {
    assert!(d.is_positive(), "dénominateur non positif: {n}/{d}");
    assert!(pgcd(n, d).is_one(), "fraction non réduite: {n}/{d}");
}

/* ------------------------ Fractions ------------------------ */

#[test]
fn plus_puis_moins_redonne_a() {
    let mut rng = Rng::new(0xF2AC_u64);

    for _ in 0..300 {
        let (n1, d1) = (rng.entier(50), rng.non_nul(50));
        let (n2, d2) = (rng.entier(50), rng.non_nul(50));

        let somme = compute_fraction(
            &n1.to_string(),
            &d1.to_string(),
            &n2.to_string(),
            &d2.to_string(),
            '+',
        )
        .unwrap();

        let retour = compute_fraction(
            &somme.numer().to_string(),
            &somme.denom().to_string(),
            &n2.to_string(),
            &d2.to_string(),
            '-',
        )
        .unwrap();

        let a = compute_fraction(&n1.to_string(), &d1.to_string(), "0", "1", '+').unwrap();
        assert_eq!(retour, a, "({n1}/{d1} + {n2}/{d2}) - {n2}/{d2}");
    }
}

#[test]
fn succes_toujours_reduit() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..400 {
        let (n1, d1) = (rng.entier(1000), rng.non_nul(1000));
        let (n2, d2) = (rng.entier(1000), rng.non_nul(1000));
        let op = ['+', '-', '*', '/'][(rng.next_u32() % 4) as usize];

        match compute_fraction(
            &n1.to_string(),
            &d1.to_string(),
            &n2.to_string(),
            &d2.to_string(),
            op,
        ) {
            Ok(r) => assert_reduite(r.numer(), r.denom()),
            Err(e) => {
                // seul échec possible ici : diviser par une fraction nulle
                assert_eq!(e, FractionError::DivisionByZero);
                assert_eq!((op, n2), ('/', 0));
            }
        }
    }
}

#[test]
fn denominateurs_negatifs() {
    for (n1, d1, n2, d2) in [("1", "-2", "1", "2"), ("-3", "-4", "1", "-6"), ("5", "-1", "0", "-7")] {
        for op in ['+', '-', '*'] {
            let r = compute_fraction(n1, d1, n2, d2, op).unwrap();
            assert_reduite(r.numer(), r.denom());
        }
    }
}

/* ------------------------ Expressions ------------------------ */

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return match rng.next_u32() % 3 {
            0 => format!("{}", rng.entier(99)),
            1 => format!("{}.{}", rng.entier(20).abs(), rng.next_u32() % 100),
            _ => format!("({})", rng.entier(9)),
        };
    }
    let op = ['+', '-', '*', '/'][(rng.next_u32() % 4) as usize];
    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    if rng.next_u32() % 2 == 0 {
        format!("({a}{op}{b})")
    } else {
        format!("{a} {op} {b}")
    }
}

#[test]
fn valeur_se_relit_a_l_identique() {
    let mut rng = Rng::new(0xA11CE_u64);
    let mut vus = 0usize;

    for _ in 0..200 {
        let expr = gen_expr(&mut rng, 3);
        let Ok(ev) = eval_expression(&expr) else {
            continue;
        };
        assert!(ev.valeur.is_finite(), "{expr:?} -> {}", ev.valeur);

        let relu = eval_expression(&format_nombre(ev.valeur))
            .unwrap_or_else(|e| panic!("relecture de {} (depuis {expr:?}): {e}", ev.valeur));
        assert_eq!(relu.valeur, ev.valeur, "{expr:?}");
        vus += 1;
    }

    assert!(vus > 50, "trop peu d’expressions évaluées: {vus}");
}

#[test]
fn petits_exposants_negatifs_relus() {
    // Display f64 n’utilise jamais d’exposant : "1e-7" s’écrirait "0.0000001"
    for x in [1e-7, -2.5e-10, 123456789.125, 1e20] {
        let relu = eval_expression(&format_nombre(x)).unwrap();
        assert_eq!(relu.valeur, x);
    }
}
