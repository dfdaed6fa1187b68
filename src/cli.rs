// src/cli.rs
//
// Ligne de commande (natif seulement).
// - sans sous-commande : interface graphique
// - `expr` / `fraction` : calcul sans interface, résultat sur stdout

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::noyau;

#[derive(Parser, Debug)]
#[command(name = "calculatrice_qsure")]
#[command(about = "Calculatrice : expressions numériques et fractions exactes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Évalue une expression infixe (chiffres, + - * / ( ) .)
    Expr {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Calcule NUM1/DEN1 OP NUM2/DEN2 en fraction réduite
    #[command(allow_negative_numbers = true)]
    Fraction {
        num1: String,
        den1: String,
        /// + - * /
        op: char,
        num2: String,
        den2: String,
        /// Chiffres de la lecture décimale (0 = pas de lecture, au plus 200)
        #[arg(
            long,
            default_value_t = 0,
            value_parser = clap::value_parser!(u64).range(0..=noyau::DIGITS_MAX as u64)
        )]
        digits: u64,
    },
}

/// Exécute une sous-commande et renvoie le texte à afficher.
pub fn handle_command(cmd: Commands) -> Result<String> {
    match cmd {
        Commands::Expr { expression } => {
            let ev = noyau::eval_expression(&expression)
                .with_context(|| format!("expression {expression:?}"))?;
            Ok(ev.texte)
        }
        Commands::Fraction {
            num1,
            den1,
            op,
            num2,
            den2,
            digits,
        } => {
            let r = noyau::compute_fraction(&num1, &den1, &num2, &den2, op)
                .with_context(|| format!("{num1}/{den1} {op} {num2}/{den2}"))?;
            // borné par le parseur clap ; le noyau borne aussi de son côté
            let digits = usize::try_from(digits).unwrap_or(noyau::DIGITS_MAX);
            if digits == 0 {
                Ok(r.texte())
            } else {
                Ok(format!(
                    "{}\n≈ {}",
                    r.texte(),
                    noyau::lecture_decimale(&r, digits)
                ))
            }
        }
    }
}
