// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, grille 5 colonnes
// - Ligne d’opérations (description) au-dessus de l’affichage
//
// La vue ne calcule rien : chaque bouton devient une Touche envoyée à etat.rs.

use eframe::egui;

use super::etat::{AppCalc, CouleurAffichage, SYMBOLE_CHECK};

/// Taille d’un bouton du pavé.
const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

/// Pavé 5 colonnes ; "" = case vide.
const PAVE: [[&str; 5]; 6] = [
    ["sin", "cos", "tan", "ln", "log"],
    ["π", "e", "√", "±", "÷"],
    ["7", "8", "9", "C", "×"],
    ["4", "5", "6", "DEL", "−"],
    ["1", "2", "3", "Random", "+"],
    ["0", ".", SYMBOLE_CHECK, "", "="],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let couleur = match self.couleur {
            CouleurAffichage::Normale => ui.visuals().strong_text_color(),
            CouleurAffichage::Verte => egui::Color32::from_rgb(0x2e, 0xa0, 0x43),
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne d’opérations
                    ui.label(
                        egui::RichText::new(&self.operations)
                            .monospace()
                            .color(ui.visuals().weak_text_color()),
                    );
                    // affichage principal
                    ui.label(
                        egui::RichText::new(&self.affichage)
                            .monospace()
                            .size(36.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for label in ligne {
                        if label.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton(ui, label);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str) {
        let touche = Touche::depuis_label(label);
        let resp = ui.add_enabled(
            self.touche_active(touche, label),
            egui::Button::new(label).min_size(TAILLE_BOUTON.into()),
        );
        if resp.clicked() {
            self.appliquer_touche(touche, label);
        }
    }

    /// Un bouton d’opération sans entrée au registre reste grisé.
    pub fn touche_active(&self, touche: Touche, label: &str) -> bool {
        touche != Touche::Operation || self.cerveau().registre().contient(label)
    }

    /// Point d’entrée commun (clic ou clavier).
    pub fn appliquer_touche(&mut self, touche: Touche, label: &str) {
        match touche {
            Touche::Chiffre => self.touche_chiffre(label),
            Touche::Operation => self.touche_operation(label),
            Touche::Clear => self.clear(),
            Touche::Backspace => self.backspace(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre,
    Operation,
    Clear,
    Backspace,
}

impl Touche {
    /// Chiffres et "." => saisie ; "C"/"DEL" => actions ; le reste => cerveau.
    pub fn depuis_label(label: &str) -> Self {
        match label {
            "C" => Touche::Clear,
            "DEL" => Touche::Backspace,
            "." => Touche::Chiffre,
            _ if label.len() == 1 && label.chars().all(|c| c.is_ascii_digit()) => Touche::Chiffre,
            _ => Touche::Operation,
        }
    }
}
