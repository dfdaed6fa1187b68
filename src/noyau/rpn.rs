// src/noyau/rpn.rs
//
// Descente récursive -> RPN -> valeur
// Objectif:
// - Convertir une suite de Jeton en programme postfixé (RPN)
// - Puis l’exécuter sur une pile de f64
//
// Grammaire (deux niveaux, associativité à gauche):
//   expr   := terme (('+' | '-') terme)*
//   terme  := facteur (('*' | '/') facteur)*
//   facteur:= '-'? ( nombre | '(' expr ')' )
//
// NOTE:
// - Les chaînes "1+1+...+1" ne font pas grandir la pile d’appels (boucles),
//   seules les parenthèses imbriquées le font : bornées par PROFONDEUR_MAX.

use super::erreurs::ExpressionError;
use super::format::format_nombre;
use super::jetons::Jeton;
use super::operateur::Operateur;

/// Garde-fou : imbrication maximale de parenthèses.
pub const PROFONDEUR_MAX: usize = 256;

/// Instruction du programme postfixé.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Instr {
    Nombre(f64),
    /// moins unaire
    Neg,
    Op(Operateur),
}

struct Analyseur<'a> {
    jetons: &'a [Jeton],
    pos: usize,
    profondeur: usize,
    out: Vec<Instr>,
}

impl Analyseur<'_> {
    fn suivant(&self) -> Option<Jeton> {
        self.jetons.get(self.pos).copied()
    }

    fn expr(&mut self) -> Result<(), ExpressionError> {
        self.terme()?;
        while let Some(Jeton::Op(op @ (Operateur::Plus | Operateur::Moins))) = self.suivant() {
            self.pos += 1;
            self.terme()?;
            self.out.push(Instr::Op(op));
        }
        Ok(())
    }

    fn terme(&mut self) -> Result<(), ExpressionError> {
        self.facteur()?;
        while let Some(Jeton::Op(op @ (Operateur::Fois | Operateur::Divise))) = self.suivant() {
            self.pos += 1;
            self.facteur()?;
            self.out.push(Instr::Op(op));
        }
        Ok(())
    }

    fn facteur(&mut self) -> Result<(), ExpressionError> {
        let neg = self.suivant() == Some(Jeton::Op(Operateur::Moins));
        if neg {
            self.pos += 1;
        }

        match self.suivant() {
            Some(Jeton::Nombre(x)) => {
                self.pos += 1;
                self.out.push(Instr::Nombre(x));
            }
            Some(Jeton::LPar) => {
                self.pos += 1;
                self.profondeur += 1;
                if self.profondeur > PROFONDEUR_MAX {
                    return Err(ExpressionError::SyntaxError);
                }

                self.expr()?;

                if self.suivant() != Some(Jeton::RPar) {
                    // parenthèse non fermée
                    return Err(ExpressionError::SyntaxError);
                }
                self.pos += 1;
                self.profondeur -= 1;
            }
            // opérateur mal placé, ')' orpheline, fin prématurée
            _ => return Err(ExpressionError::SyntaxError),
        }

        if neg {
            self.out.push(Instr::Neg);
        }
        Ok(())
    }
}

/// Convertit une suite de jetons en RPN.
///
/// Exemple:
///   jetons: [Nombre(2), Op(*), LPar, Op(-), Nombre(3), RPar]
///   rpn:    [Nombre(2), Nombre(3), Neg, Op(*)]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Instr>, ExpressionError> {
    if jetons.is_empty() {
        return Err(ExpressionError::SyntaxError);
    }

    let mut a = Analyseur {
        jetons,
        pos: 0,
        profondeur: 0,
        out: Vec::with_capacity(jetons.len()),
    };
    a.expr()?;

    // jetons restants : ")" en trop, "2 3", etc.
    if a.pos != jetons.len() {
        return Err(ExpressionError::SyntaxError);
    }
    Ok(a.out)
}

/// Exécute un programme RPN sur une pile de f64.
/// Diviseur nul => DivisionByZero (jamais ±∞ / NaN en succès).
pub fn eval_rpn(rpn: &[Instr]) -> Result<f64, ExpressionError> {
    let mut st: Vec<f64> = Vec::new();

    for ins in rpn {
        match *ins {
            Instr::Nombre(x) => st.push(x),
            Instr::Neg => {
                let x = st.pop().ok_or(ExpressionError::SyntaxError)?;
                st.push(-x);
            }
            Instr::Op(op) => {
                let b = st.pop().ok_or(ExpressionError::SyntaxError)?;
                let a = st.pop().ok_or(ExpressionError::SyntaxError)?;
                let v = match op {
                    Operateur::Plus => a + b,
                    Operateur::Moins => a - b,
                    Operateur::Fois => a * b,
                    Operateur::Divise => {
                        if b == 0.0 {
                            return Err(ExpressionError::DivisionByZero);
                        }
                        a / b
                    }
                };
                // jamais ±∞ ni NaN en sortie
                if !v.is_finite() {
                    return Err(ExpressionError::Overflow);
                }
                st.push(v);
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ExpressionError::SyntaxError),
    }
}

/// Format utilitaire (démarche) : programme RPN en texte.
pub fn format_rpn(rpn: &[Instr]) -> String {
    rpn.iter()
        .map(|i| match i {
            Instr::Nombre(x) => format_nombre(*x),
            Instr::Neg => "neg".to_string(),
            Instr::Op(op) => op.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
