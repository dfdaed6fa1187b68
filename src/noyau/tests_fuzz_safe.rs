//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariant clé : un succès est toujours fini (ni NaN ni ±∞), et "/0" n’est jamais un succès
//! - invariant pile : aucune entrée (chaîne longue, imbrication) ne fait tomber le processus

use std::time::{Duration, Instant};

use super::erreurs::{ExpressionError, FractionError};
use super::{compute_fraction, eval_expression};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

/// Soupe de caractères : alphabet du filtre + parasites.
fn gen_soupe(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '5', '9', '.', '+', '-', '*', '/', '(', ')', ' ', 'x', 'π', '^', '√', '%', ';',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_soupe_de_caracteres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let expr = gen_soupe(&mut rng, len);

        match eval_expression(&expr) {
            Ok(ev) => {
                assert!(ev.valeur.is_finite(), "non fini en succès: {expr:?}");
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }

        // déterminisme : même entrée => même sortie
        assert_eq!(eval_expression(&expr), eval_expression(&expr));
    }

    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

/// Littéral géant : 1 à 400 chiffres, pour franchir la limite f64 (~309).
fn gen_litteral(rng: &mut Rng) -> String {
    let len = 1 + rng.pick(400) as usize;
    (0..len)
        .map(|i| {
            let d = rng.pick(10);
            char::from_digit(if i == 0 { 1 + d % 9 } else { d }, 10).unwrap_or('1')
        })
        .collect()
}

#[test]
fn fuzz_safe_litteraux_geants_jamais_non_finis() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xB16_u64);
    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let a = gen_litteral(&mut rng);
        let b = gen_litteral(&mut rng);
        let op = ["+", "-", "*", "/"][rng.pick(4) as usize];
        let expr = format!("{a} {op} {b}");

        match eval_expression(&expr) {
            Ok(ev) => {
                assert!(ev.valeur.is_finite(), "non fini en succès: {expr:?}");
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    matches!(e, ExpressionError::ParseError | ExpressionError::Overflow),
                    "{e:?} pour {expr:?}"
                );
                seen_err += 1;
            }
        }
    }

    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_division_par_zero_jamais_en_succes() {
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        let a = rng.pick(1000);
        let z = ["0", "0.0", "(1-1)", "(2*0)", "-0", "(.0)"][rng.pick(6) as usize];
        let expr = format!("{a} / {z}");
        assert_eq!(
            eval_expression(&expr),
            Err(ExpressionError::DivisionByZero),
            "{expr:?}"
        );
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1/2", 200);
    budget(t0, max);

    let ev = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 200*(1/2) = 100
    assert_eq!(ev.valeur, 100.0);
}

#[test]
fn fuzz_safe_longue_chaine_sans_parentheses() {
    // 50 000 termes : boucles seulement, aucune récursion proportionnelle
    let expr = vec!["1"; 50_000].join("+");
    assert_eq!(eval_expression(&expr).map(|ev| ev.valeur), Ok(50_000.0));
}

#[test]
fn fuzz_safe_imbrication_hostile() {
    let expr = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(eval_expression(&expr), Err(ExpressionError::SyntaxError));

    let expr = "(".repeat(100_000);
    assert_eq!(eval_expression(&expr), Err(ExpressionError::SyntaxError));
}

#[test]
fn fuzz_safe_fractions_champs_quelconques() {
    let mut rng = Rng::new(0xF00D_u64);

    for _ in 0..500 {
        let champs: Vec<String> = (0..4)
            .map(|_| {
                let len = 1 + rng.pick(4) as usize;
                gen_soupe(&mut rng, len)
            })
            .collect();
        let op = ['+', '-', '*', '/', '%'][rng.pick(5) as usize];

        match compute_fraction(&champs[0], &champs[1], &champs[2], &champs[3], op) {
            Ok(r) => assert!(!r.texte().is_empty()),
            Err(FractionError::InvalidInput)
            | Err(FractionError::DivisionByZero)
            | Err(FractionError::UnsupportedOperator) => {}
        }
    }
}
