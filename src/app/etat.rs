//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, saisie en cours, ligne
//! d’opérations, couleur) et traduire les touches en appels au cerveau.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `noyau::Cerveau`.
//! - Le cerveau reste pur : l’effet visuel de "✅" est décidé ici, après coup.
//! - Affichage jamais vide : "0" par défaut.

use thiserror::Error;
use tracing::{debug, warn};

use crate::noyau::{format_nombre, Cerveau};

/// Valeur affichée au démarrage / après effacement.
pub const AFFICHAGE_INITIAL: &str = "0";

/// Opération personnalisée : racine carrée + affichage en vert.
pub const SYMBOLE_CHECK: &str = "✅";

/// Lecture de l’affichage impossible (frontière UI -> cerveau).
#[derive(Debug, Error, PartialEq)]
pub enum ErreurSaisie {
    #[error("affichage vide")]
    Vide,
    #[error("affichage non numérique : {0:?}")]
    NonNumerique(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CouleurAffichage {
    #[default]
    Normale,
    Verte,
}

#[derive(Debug)]
pub struct AppCalc {
    // --- affichage ---
    pub affichage: String,  // nombre en cours de saisie OU dernier résultat
    pub operations: String, // description du calcul ("3+4=", "3+...")
    pub couleur: CouleurAffichage,

    // --- saisie ---
    pub en_saisie: bool,

    cerveau: Cerveau,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_cerveau(Cerveau::default())
    }
}

impl AppCalc {
    /// Construit l’état autour d’un cerveau donné (graine fixe en test).
    pub fn avec_cerveau(mut cerveau: Cerveau) -> Self {
        cerveau.ajouter_unaire(SYMBOLE_CHECK, f64::sqrt);
        debug!(symboles = ?cerveau.registre().symboles(), "registre prêt");
        Self {
            affichage: AFFICHAGE_INITIAL.to_string(),
            operations: AFFICHAGE_INITIAL.to_string(),
            couleur: CouleurAffichage::Normale,
            en_saisie: false,
            cerveau,
        }
    }

    pub fn cerveau(&self) -> &Cerveau {
        &self.cerveau
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre ou ".".
    /// - hors saisie : remplace l’affichage ("." => "0.")
    /// - en saisie   : ajoute, sauf second "."
    pub fn touche_chiffre(&mut self, chiffre: &str) {
        if self.en_saisie {
            if chiffre == "." && self.affichage.contains('.') {
                return;
            }
            self.affichage.push_str(chiffre);
        } else {
            self.affichage = if chiffre == "." {
                format!("{AFFICHAGE_INITIAL}.")
            } else {
                chiffre.to_string()
            };
            self.en_saisie = true;
        }
    }

    /// DEL : retire le dernier caractère (seulement en saisie).
    /// Affichage vidé => retour à "0" hors saisie.
    pub fn backspace(&mut self) {
        if !self.en_saisie {
            return;
        }
        self.affichage.pop();
        if self.affichage.is_empty() {
            self.en_saisie = false;
            self.affichage = AFFICHAGE_INITIAL.to_string();
        }
    }

    /// Valeur numérique de l’affichage.
    pub fn valeur_affichage(&self) -> Result<f64, ErreurSaisie> {
        let s = self.affichage.trim();
        if s.is_empty() {
            return Err(ErreurSaisie::Vide);
        }
        s.parse::<f64>()
            .map_err(|_| ErreurSaisie::NonNumerique(s.to_string()))
    }

    fn set_valeur_affichage(&mut self, v: f64) {
        self.affichage = format_nombre(v);
    }

    /* ------------------------ Opérations ------------------------ */

    /// Touche d’opération : pousse l’opérande saisi, exécute, met à jour l’écran.
    pub fn touche_operation(&mut self, symbole: &str) {
        if self.en_saisie {
            match self.valeur_affichage() {
                Ok(v) => self.cerveau.set_operande(v),
                Err(e) => {
                    warn!(erreur = %e, "saisie ignorée");
                    self.affichage = AFFICHAGE_INITIAL.to_string();
                }
            }
            self.en_saisie = false;
        }

        // "✅" n’agit (comme toute unaire) que si un opérande existe
        let check_applicable = symbole == SYMBOLE_CHECK && self.cerveau.resultat().is_some();

        self.cerveau.executer(symbole);

        if check_applicable {
            self.couleur = CouleurAffichage::Verte;
        }

        // "..." tant qu’aucun résultat n’est lisible, "=" dès qu’il y en a un
        // (y compris pendant une attente : "2*π=")
        if let Some(d) = self.cerveau.description() {
            self.operations = format!("{d}...");
        }
        if let Some(r) = self.cerveau.resultat() {
            self.set_valeur_affichage(r);
            if let Some(d) = self.cerveau.description() {
                self.operations = format!("{d}=");
            }
        }
    }

    /// C : remise à zéro totale (cerveau + écran + couleur).
    pub fn clear(&mut self) {
        self.cerveau.clear_tout();
        self.en_saisie = false;
        self.affichage = AFFICHAGE_INITIAL.to_string();
        self.operations = AFFICHAGE_INITIAL.to_string();
        self.couleur = CouleurAffichage::Normale;
    }
}
