// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Deux onglets : Expression / Fractions
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Panneau latéral : historique + exemples

use eframe::egui;
use tracing::{info, warn};

use super::etat::{
    AppCalc, Demarche, EntreeHistorique, Onglet, Rejeu, SaisieFraction, EXEMPLES,
};
use crate::noyau::{self, Operateur, DIGITS_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Q-sûre");
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.onglet, Onglet::Expression, "Expression");
                    ui.selectable_value(&mut self.onglet, Onglet::Fractions, "Fractions");

                    ui.separator();

                    // Contrat: C = saisie de l’onglet ; AC = tout (historique conservé)
                    self.bouton_action(ui, "C", "Efface la saisie", Action::ClearEntree);
                    self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
                });

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                match self.onglet {
                    Onglet::Expression => self.ui_expression(ui),
                    Onglet::Fractions => self.ui_fractions(ui),
                }
            });
    }

    /* ------------------------ Onglet Expression ------------------------ */

    fn ui_expression(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (15 + 23) * 4 - 18 / 2")
                .id_salt("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / C / historique), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue seulement si le champ est focus (pas de déclenchement “global”)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_expression_via_noyau();
        }

        ui.add_space(8.0);
        self.ui_pave_numerique(ui);

        if !self.expr_erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.expr_erreur);
        }

        ui.add_space(8.0);
        ui.label("Résultat :");
        Self::champ_monospace(ui, "expr_out", &self.expr_resultat, 2);

        ui.add_space(8.0);
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Assaini", "demarche_assaini", &self.demarche.assaini);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        const LIGNES: [[&str; 4]; 5] = [
            ["7", "8", "9", "/"],
            ["4", "5", "6", "*"],
            ["1", "2", "3", "-"],
            ["0", ".", "=", "+"],
            ["(", ")", "", ""],
        ];

        egui::Grid::new("pave_numerique_qsure")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in LIGNES {
                    for touche in ligne {
                        match touche {
                            "" => {
                                ui.label("");
                            }
                            "=" => {
                                let eq = ui.add_sized([56.0, 36.0], egui::Button::new("="));
                                if eq.clicked() {
                                    self.eval_expression_via_noyau();
                                }
                            }
                            _ => {
                                let b = ui.add_sized([56.0, 36.0], egui::Button::new(touche));
                                if b.clicked() {
                                    self.entree.push_str(touche);
                                    self.focus_entree = true;
                                }
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    /// Évalue l’expression via le noyau, puis dépose texte/démarche dans l’état UI.
    pub(crate) fn eval_expression_via_noyau(&mut self) {
        let s = self.entree.trim().to_string();
        if s.is_empty() {
            self.set_erreur_expression("Entrée vide");
            return;
        }

        match noyau::eval_expression(&s) {
            Ok(ev) => {
                info!(expression = %s, valeur = ev.valeur, "expression évaluée");
                let d = Demarche {
                    assaini: ev.demarche.assaini,
                    jetons: ev.demarche.jetons,
                    rpn: ev.demarche.rpn,
                };
                self.push_historique(EntreeHistorique {
                    probleme: s.clone(),
                    resultat: ev.texte.clone(),
                    rejeu: Rejeu::Expression(s),
                });
                self.set_resultat_expression(ev.texte, d);
            }
            Err(e) => {
                warn!(expression = %s, erreur = ?e, "expression refusée");
                self.set_erreur_expression(e.to_string());
            }
        }
    }

    /* ------------------------ Onglet Fractions ------------------------ */

    fn ui_fractions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            Self::ui_saisie_fraction(ui, "fraction1", &mut self.fraction1);

            ui.add_space(10.0);
            for op in Operateur::TOUS {
                let label = op.to_string();
                let choisi = self.operateur == op;
                let b = ui.add_sized([36.0, 36.0], egui::Button::new(label).selected(choisi));
                if b.clicked() {
                    self.operateur = op;
                }
            }
            ui.add_space(10.0);

            Self::ui_saisie_fraction(ui, "fraction2", &mut self.fraction2);
        });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let calc = ui.add_sized([120.0, 32.0], egui::Button::new("Calculer"));
            if calc.clicked() {
                self.calculer_fraction_via_noyau();
            }

            ui.separator();

            ui.label("Lecture :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        if !self.fraction_erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.fraction_erreur);
        }

        ui.add_space(8.0);
        ui.label("Résultat :");
        Self::champ_monospace(ui, "fraction_out", &self.fraction_resultat, 1);

        ui.add_space(6.0);
        ui.label("Lecture décimale :");
        if self.fraction_lecture.is_empty() {
            ui.monospace("indisponible");
        } else {
            Self::champ_monospace(ui, "fraction_lecture", &self.fraction_lecture, 1);
        }
    }

    fn ui_saisie_fraction(ui: &mut egui::Ui, id: &str, f: &mut SaisieFraction) {
        ui.push_id(id, |ui| {
            ui.vertical(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut f.num)
                        .desired_width(80.0)
                        .hint_text("numérateur"),
                );
                ui.separator();
                ui.add(
                    egui::TextEdit::singleline(&mut f.den)
                        .desired_width(80.0)
                        .hint_text("dénominateur"),
                );
            });
        });
    }

    /// Calcule a op b via le noyau, puis dépose texte + lecture décimale.
    pub(crate) fn calculer_fraction_via_noyau(&mut self) {
        let (a, b, op) = (
            self.fraction1.clone(),
            self.fraction2.clone(),
            self.operateur,
        );

        match noyau::compute_fraction(&a.num, &a.den, &b.num, &b.den, op.symbole()) {
            Ok(r) => {
                let texte = r.texte();
                info!(resultat = %texte, "fraction calculée");
                self.push_historique(EntreeHistorique {
                    probleme: format!("{}/{} {op} {}/{}", a.num, a.den, b.num, b.den),
                    resultat: texte.clone(),
                    rejeu: Rejeu::Fractions { a, b, op },
                });
                let lecture = noyau::lecture_decimale(&r, self.digits);
                self.set_resultat_fraction(texte, lecture);
            }
            Err(e) => {
                warn!(erreur = ?e, "fraction refusée");
                self.set_erreur_fraction(e.to_string());
            }
        }
    }

    /* ------------------------ Panneau latéral ------------------------ */

    /// Historique + exemples (panneau de droite).
    pub fn ui_lateral(&mut self, ui: &mut egui::Ui) {
        ui.heading("Historique");
        ui.add_space(4.0);

        let mut a_charger = None;
        egui::ScrollArea::vertical()
            .id_salt("historique_scroll")
            .max_height(300.0)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("Historique vide");
                }
                for (i, e) in self.historique.iter().enumerate() {
                    let b = ui
                        .add(egui::Button::new(e.probleme.as_str()))
                        .on_hover_text(e.resultat.as_str());
                    if b.clicked() {
                        a_charger = Some(i);
                    }
                }
            });
        if let Some(i) = a_charger {
            self.charger_historique(i);
        }

        ui.add_space(8.0);
        ui.separator();
        ui.heading("Exemples");
        ui.add_space(4.0);

        for ex in EXEMPLES {
            if ui.button(ex).clicked() {
                self.charger_exemple(ex);
            }
        }
    }

    /* ------------------------ Widgets utilitaires ------------------------ */

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
            }
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
}
