// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Raccourcis clavier globaux (pas de champ texte : tout est global)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;
use vue::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.raccourcis_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

impl AppCalc {
    /// ESC = C, Backspace = DEL, Enter = "=", chiffres / "." / + - * / tapés.
    fn raccourcis_clavier(&mut self, ctx: &egui::Context) {
        let (esc, retour, entree, texte) = ctx.input(|i| {
            let texte: String = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect();
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Enter),
                texte,
            )
        });

        if esc {
            self.clear();
        }
        if retour {
            self.backspace();
        }
        for c in texte.chars() {
            let symbole = match c {
                '*' => "×",
                '/' => "÷",
                '-' => "−",
                '+' => "+",
                '=' => "=",
                '0'..='9' | '.' => {
                    self.appliquer_touche(Touche::Chiffre, &c.to_string());
                    continue;
                }
                _ => continue,
            };
            self.appliquer_touche(Touche::Operation, symbole);
        }
        if entree {
            self.appliquer_touche(Touche::Operation, "=");
        }
    }
}
