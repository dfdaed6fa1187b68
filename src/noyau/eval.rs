//! Noyau — évaluation d’expression (pipeline réel)
//!
//! assainir -> jetons -> RPN (descente récursive) -> pile f64 -> texte
//!
//! Aucune exécution de code : la grammaire de rpn.rs est le seul langage accepté.

use tracing::debug;

use super::erreurs::ExpressionError;
use super::format::format_resultat;
use super::jetons::{assainir, format_tokens, tokenize};
use super::rpn::{eval_rpn, format_rpn, to_rpn};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub assaini: String,
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    /// "<saisie> = <valeur>"
    pub texte: String,
    pub demarche: DemarcheNoyau,
}

/// API publique : évalue une expression infixe numérique.
///
/// Le texte reprend la saisie (espaces de bord retirés), pas la forme assainie.
pub fn eval_expression(expr_str: &str) -> Result<Evaluation, ExpressionError> {
    let saisie = expr_str.trim();

    // 1) Filtre
    let assaini = assainir(saisie);

    // 2) Jetons
    let jetons = tokenize(&assaini)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;

    // 4) Pile
    let valeur = eval_rpn(&rpn)?;

    let demarche = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
        assaini,
    };
    debug!(jetons = %demarche.jetons, rpn = %demarche.rpn, valeur, "expression évaluée");

    Ok(Evaluation {
        valeur,
        texte: format_resultat(saisie, valeur),
        demarche,
    })
}
