// src/noyau/jetons.rs

use tracing::debug;

use super::erreurs::ExpressionError;
use super::format::format_nombre;
use super::operateur::Operateur;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Operateur),
    LPar,
    RPar,
}

/// Caractères admis par le filtre d’entrée.
fn est_admis(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.') || c.is_whitespace()
}

/// Filtre silencieux : supprime tout caractère hors de
/// {0-9, + - * / ( ) ., espaces}. Ce n’est PAS un contrôle de syntaxe :
/// "2++3" ou "(1" passent tels quels.
pub fn assainir(s: &str) -> String {
    s.chars().filter(|&c| est_admis(c)).collect()
}

/// Tokenize une chaîne (déjà assainie) en jetons.
/// - séquences de chiffres / '.' => Nombre (au plus un '.', sinon ParseError ;
///   "." seul => ParseError)
/// - + - * / ( ) => un jeton chacun
/// - espaces ignorés
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ExpressionError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            out.push(Jeton::Nombre(lire_nombre(&lit)?));
            continue;
        }

        let j = match c {
            '(' => Jeton::LPar,
            ')' => Jeton::RPar,
            _ => match Operateur::try_from(c) {
                Ok(op) => Jeton::Op(op),
                _ => {
                    debug!(caractere = %c, "caractère inattendu après assainissement");
                    return Err(ExpressionError::SyntaxError);
                }
            },
        };
        out.push(j);
        i += 1;
    }

    Ok(out)
}

/// Littéral numérique : chiffres avec au plus un point décimal.
fn lire_nombre(lit: &str) -> Result<f64, ExpressionError> {
    if lit.matches('.').count() > 1 {
        return Err(ExpressionError::ParseError);
    }
    // "5." et ".5" sont acceptés par f64::from_str ; "." ne l’est pas
    let x = lit.parse::<f64>().map_err(|_| ExpressionError::ParseError)?;
    // plus de ~309 chiffres : f64::from_str rend +∞
    if !x.is_finite() {
        return Err(ExpressionError::ParseError);
    }
    Ok(x)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Jeton::Nombre(x) => format_nombre(*x),
            Jeton::Op(op) => op.to_string(),
            Jeton::LPar => "(".to_string(),
            Jeton::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
