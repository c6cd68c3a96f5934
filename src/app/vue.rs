// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, pavé scientifique complet
// - Écran : entrée en cours + "Ans = …" (ou l'indicateur d'erreur)
// - Historique cliquable : rappelle la valeur dans l'entrée
//
// Note : l'entrée n'est pas un TextEdit. Les règles de saisie vivent
// dans le noyau ; la vue ne fait qu'émettre des jetons.

use eframe::egui;

use crate::noyau::MESSAGE_ERREUR;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);

                ui.add_space(6.0);
                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();

                self.ui_historique(ui);
            });
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculatrice scientifique");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let resp = ui
                    .add_sized(
                        [56.0, 28.0],
                        egui::Button::new(self.session.mode_angle().etiquette()),
                    )
                    .on_hover_text("Bascule radians / degrés");
                if resp.clicked() {
                    self.session.basculer_mode_angle();
                }
            });
        });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(self.session.entree());
            });

        if self.session.en_erreur() {
            ui.colored_label(ui.visuals().error_fg_color, MESSAGE_ERREUR);
        } else {
            ui.small(format!("Ans = {}", self.session.derniere_reponse()));
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_jeton(ui, "sin", "sin(");
                self.bouton_jeton(ui, "cos", "cos(");
                self.bouton_jeton(ui, "tan", "tan(");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Effacer);
                self.bouton_action(ui, "AC", "Remet l’entrée à zéro (Ans conservé)", Action::RemiseAZero);
                ui.end_row();

                self.bouton_jeton(ui, "asin", "asin(");
                self.bouton_jeton(ui, "acos", "acos(");
                self.bouton_jeton(ui, "atan", "atan(");
                self.bouton_jeton(ui, "(", "(");
                self.bouton_jeton(ui, ")", ")");
                ui.end_row();

                self.bouton_jeton(ui, "ln", "ln(");
                self.bouton_jeton(ui, "log", "log(");
                self.bouton_jeton(ui, "√", "sqrt(");
                self.bouton_jeton(ui, "^", "^");
                self.bouton_jeton(ui, "!", "!");
                ui.end_row();

                self.bouton_jeton(ui, "7", "7");
                self.bouton_jeton(ui, "8", "8");
                self.bouton_jeton(ui, "9", "9");
                self.bouton_jeton(ui, "*", "*");
                self.bouton_jeton(ui, "/", "/");
                ui.end_row();

                self.bouton_jeton(ui, "4", "4");
                self.bouton_jeton(ui, "5", "5");
                self.bouton_jeton(ui, "6", "6");
                self.bouton_jeton(ui, "+", "+");
                self.bouton_jeton(ui, "-", "-");
                ui.end_row();

                self.bouton_jeton(ui, "1", "1");
                self.bouton_jeton(ui, "2", "2");
                self.bouton_jeton(ui, "3", "3");
                self.bouton_jeton(ui, "%", "%");
                self.bouton_jeton(ui, ",", ",");
                ui.end_row();

                self.bouton_jeton(ui, "0", "0");
                self.bouton_jeton(ui, ".", ".");
                self.bouton_jeton(ui, "π", "π");
                self.bouton_jeton(ui, "e", "e");
                self.bouton_jeton(ui, "Ans", "Ans");
                ui.end_row();
            });

        ui.add_space(6.0);

        let eq = ui.add_sized([ui.available_width().min(280.0), 36.0], egui::Button::new("="));
        if eq.clicked() {
            self.session.evaluer();
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.session.historique().is_empty() {
                    ui.monospace("(vide)");
                    return;
                }

                // Cliquer une ligne recopie sa VALEUR dans l'entrée.
                let lignes: Vec<String> = self
                    .session
                    .historique()
                    .iter()
                    .map(|e| format!("{} = {}", e.expression, e.valeur))
                    .collect();

                let mut choisie = None;
                for (i, ligne) in lignes.iter().enumerate() {
                    let resp = ui
                        .button(egui::RichText::new(ligne.as_str()).monospace())
                        .on_hover_text("Rappelle cette valeur dans l’entrée");
                    if resp.clicked() {
                        choisie = Some(i);
                    }
                }
                if let Some(i) = choisie {
                    self.session.selectionner_historique(i);
                }
            });
    }

    fn bouton_jeton(&mut self, ui: &mut egui::Ui, label: &str, jeton: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.session.ajouter_jeton(jeton);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([46.0, 28.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Effacer => self.session.effacer_dernier(),
                Action::RemiseAZero => self.session.reinitialiser(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Effacer,
    RemiseAZero,
}
