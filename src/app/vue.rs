// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Les fonctions s’insèrent par leur code suivi de '(' (bulle = nom lisible)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::operateur::Fonction;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice SY");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_entree(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Écran :");
            ui.add_space(8.0);
            let libelle = self.mode_angle().libelle();
            let resp = ui
                .add_sized([56.0, 24.0], egui::Button::new(libelle))
                .on_hover_text("Bascule degrés / radians");
            if resp.clicked() {
                self.basculer_mode_angle();
            }
        });

        let ecran = self.ecran().to_string();
        if self.ecran_en_erreur() {
            egui::Frame::group(ui.style())
                .fill(ui.visuals().extreme_bg_color)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.colored_label(ui.visuals().error_fg_color, ecran);
                });
        } else {
            Self::champ_monospace(ui, "ecran_out", &ecran, 1);
        }
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2p, s30+c60, q(16)/!3, 2^3^2")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evaluer();
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = écran seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Remet l’écran à 0", Action::ClearEcran);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
        });

        ui.add_space(8.0);

        // Opérateurs + constantes + "="
        ui.horizontal_wrapped(|ui| {
            for s in ["(", ")", "+", "-", "*", "/", "%", "^"] {
                self.bouton_insert(ui, s, s, None);
            }

            ui.separator();

            self.bouton_insert(ui, "π", "p", Some("constante π"));
            self.bouton_insert(ui, "e", "e", Some("constante e"));

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.evaluer();
            }
        });

        ui.add_space(8.0);

        self.ui_fonctions(ui);

        ui.add_space(8.0);

        // Pavé numérique
        self.ui_pave_numerique(ui);
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("fonctions_sy")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (k, &f) in Fonction::TOUTES.iter().enumerate() {
                    let resp = ui
                        .add_sized([46.0, 28.0], egui::Button::new(f.nom()))
                        .on_hover_text(format!("code « {}( »", f.code()));
                    if resp.clicked() {
                        self.inserer_fonction(f);
                    }
                    if k % 5 == 4 {
                        ui.end_row();
                    }
                }
                ui.end_row();
            });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_sy")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"], ["0", ".", ""]] {
                    for s in ligne {
                        if s.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton_insert(ui, s, s, None);
                        }
                    }
                    ui.end_row();
                }
            });
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
                Action::ClearEcran => self.clear_ecran(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, tip: Option<&str>) {
        let mut resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if let Some(t) = tip {
            resp = resp.on_hover_text(t);
        }
        if resp.clicked() {
            self.inserer(to_insert);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearEcran,
    ResetTotal,
    Backspace,
}
