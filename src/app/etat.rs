//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (onglet, saisies, résultats, erreurs,
//! historique) et offrir des opérations simples (C/AC, historique) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur digits et sur l’historique.

use std::collections::VecDeque;

use crate::noyau::{Operateur, DIGITS_MAX};

/// Précision de lecture décimale par défaut (fractions).
const DIGITS_DEFAUT: usize = 10;

/// Nombre d’entrées conservées dans l’historique.
pub const HISTORIQUE_MAX: usize = 20;

/// Exemples proposés dans le panneau latéral.
pub const EXEMPLES: [&str; 5] = [
    "(15 + 23) * 4 - 18 / 2",
    "2 + 2 * 2",
    "-(3.5 - 1) / 4",
    "0.1 + 0.2",
    "100 / (4 - 4)",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Onglet {
    #[default]
    Expression,
    Fractions,
}

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct SaisieFraction {
    pub num: String,
    pub den: String,
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub assaini: String,
    pub jetons: String,
    pub rpn: String,
}

/// Ce qu’il faut pour rejouer un calcul depuis l’historique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejeu {
    Expression(String),
    Fractions {
        a: SaisieFraction,
        b: SaisieFraction,
        op: Operateur,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub probleme: String,
    pub resultat: String,
    pub rejeu: Rejeu,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub onglet: Onglet,

    // --- onglet Expression ---
    pub entree: String,
    pub expr_resultat: String,
    pub expr_erreur: String,
    pub demarche: Demarche,

    // --- onglet Fractions ---
    pub fraction1: SaisieFraction,
    pub fraction2: SaisieFraction,
    pub operateur: Operateur,
    pub fraction_resultat: String,
    pub fraction_lecture: String,
    pub fraction_erreur: String,

    // --- paramètres ---
    pub digits: usize, // lecture décimale des fractions

    // --- historique (plus récent en tête) ---
    pub historique: VecDeque<EntreeHistorique>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            onglet: Onglet::default(),
            entree: String::new(),
            expr_resultat: String::new(),
            expr_erreur: String::new(),
            demarche: Demarche::default(),
            fraction1: SaisieFraction::default(),
            fraction2: SaisieFraction::default(),
            operateur: Operateur::default(),
            fraction_resultat: String::new(),
            fraction_lecture: String::new(),
            fraction_erreur: String::new(),
            digits: DIGITS_DEFAUT,
            historique: VecDeque::with_capacity(HISTORIQUE_MAX),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (saisies + résultats + digits), historique conservé.
    pub fn reset_total(&mut self) {
        let historique = std::mem::take(&mut self.historique);
        *self = Self {
            onglet: self.onglet,
            historique,
            ..Self::default()
        };
    }

    /// C : effacer seulement la saisie de l’onglet courant.
    pub fn clear_entree(&mut self) {
        match self.onglet {
            Onglet::Expression => self.entree.clear(),
            Onglet::Fractions => {
                self.fraction1 = SaisieFraction::default();
                self.fraction2 = SaisieFraction::default();
            }
        }
        self.focus_entree = true;
    }

    /// Erreur d’expression : on CONSERVE le dernier résultat, on coupe la démarche.
    pub fn set_erreur_expression(&mut self, msg: impl Into<String>) {
        self.expr_erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultat_expression(&mut self, texte: impl Into<String>, demarche: Demarche) {
        self.expr_erreur.clear();
        self.expr_resultat = texte.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Erreur de fraction : lecture décimale indisponible.
    pub fn set_erreur_fraction(&mut self, msg: impl Into<String>) {
        self.fraction_erreur = msg.into();
        self.fraction_lecture.clear();
    }

    pub fn set_resultat_fraction(&mut self, texte: impl Into<String>, lecture: String) {
        self.fraction_erreur.clear();
        self.fraction_resultat = texte.into();
        self.fraction_lecture = lecture;
    }

    /// Garde-fou : limite digits (évite abus / gel plus tard).
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
    }

    /* ------------------------ Historique / exemples ------------------------ */

    /// Ajoute en tête ; au-delà de HISTORIQUE_MAX, la plus ancienne entrée tombe.
    pub fn push_historique(&mut self, entree: EntreeHistorique) {
        self.historique.push_front(entree);
        self.historique.truncate(HISTORIQUE_MAX);
    }

    /// Recharge la saisie d’une entrée d’historique dans son onglet.
    pub fn charger_historique(&mut self, index: usize) {
        let Some(e) = self.historique.get(index) else {
            return;
        };

        match e.rejeu.clone() {
            Rejeu::Expression(s) => {
                self.onglet = Onglet::Expression;
                self.entree = s;
            }
            Rejeu::Fractions { a, b, op } => {
                self.onglet = Onglet::Fractions;
                self.fraction1 = a;
                self.fraction2 = b;
                self.operateur = op;
            }
        }
        self.focus_entree = true;
    }

    pub fn charger_exemple(&mut self, exemple: &str) {
        self.onglet = Onglet::Expression;
        self.entree = exemple.to_string();
        self.focus_entree = true;
    }
}
