//! Noyau — cerveau de la calculatrice (accumulateur + opération en attente)
//!
//! Contrats :
//! - Aucune erreur : séquence invalide (opérateur sans opérande, "=" sans attente,
//!   symbole inconnu) => aucun changement d’état.
//! - Cas numériques limites (÷0, ln(-1), √-1) : valeurs IEEE-754 propagées telles quelles.
//! - `resultat_en_attente()` <=> une opération binaire est capturée.
//! - Pas thread-safe (fonctions en `Rc`) : une instance par session UI.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::format::format_nombre;
use super::operation::{DescBinaire, FnBinaire, Operation, Registre};

/// Valeur courante + sa dérivation textuelle.
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulateur {
    pub valeur: f64,
    pub description: String,
}

/// Opération binaire capturée, en attente du second opérande.
struct OperationEnAttente {
    fonction: FnBinaire,
    description: DescBinaire,
    premier: Accumulateur,
}

impl OperationEnAttente {
    fn appliquer(&self, second: &Accumulateur) -> Accumulateur {
        Accumulateur {
            valeur: (self.fonction)(self.premier.valeur, second.valeur),
            description: (self.description)(&self.premier.description, &second.description),
        }
    }
}

pub struct Cerveau {
    accumulateur: Option<Accumulateur>,
    en_attente: Option<OperationEnAttente>,
    registre: Registre,
    alea: StdRng,
}

impl Default for Cerveau {
    fn default() -> Self {
        Self::avec_alea(StdRng::from_entropy())
    }
}

impl std::fmt::Debug for Cerveau {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cerveau")
            .field("accumulateur", &self.accumulateur)
            .field("en_attente", &self.description_en_attente())
            .finish_non_exhaustive()
    }
}

impl Cerveau {
    /// Cerveau reproductible : "Random" suit la graine.
    #[cfg(test)]
    pub fn avec_graine(graine: u64) -> Self {
        Self::avec_alea(StdRng::seed_from_u64(graine))
    }

    fn avec_alea(alea: StdRng) -> Self {
        Self {
            accumulateur: None,
            en_attente: None,
            registre: Registre::default(),
            alea,
        }
    }

    /* ------------------------ Entrées ------------------------ */

    /// Remplace l’accumulateur par (v, format(v)). Ne touche pas à l’attente.
    pub fn set_operande(&mut self, v: f64) {
        self.accumulateur = Some(Accumulateur {
            valeur: v,
            description: format_nombre(v),
        });
    }

    /// Exécute l’opération associée à `symbole` (inconnu => rien).
    pub fn executer(&mut self, symbole: &str) {
        let Some(op) = self.registre.get(symbole) else {
            debug!(symbole, "symbole inconnu, ignoré");
            return;
        };

        match op {
            Operation::Constante(v) => {
                self.accumulateur = Some(Accumulateur {
                    valeur: *v,
                    description: symbole.to_string(),
                });
            }
            Operation::Unaire(f, d) => match self.accumulateur.as_mut() {
                Some(acc) => {
                    acc.valeur = f(acc.valeur);
                    acc.description = d(&acc.description);
                }
                None => trace!(symbole, "unaire sans opérande, ignorée"),
            },
            Operation::Binaire(f, d) => match self.accumulateur.take() {
                Some(premier) => {
                    if self.en_attente.is_some() {
                        debug!(symbole, "opération en attente remplacée");
                    }
                    self.en_attente = Some(OperationEnAttente {
                        fonction: f.clone(),
                        description: d.clone(),
                        premier,
                    });
                }
                None => trace!(symbole, "binaire sans opérande, ignorée"),
            },
            Operation::Egal => self.resoudre_attente(),
            Operation::Aleatoire => {
                let v: f64 = self.alea.gen();
                self.accumulateur = Some(Accumulateur {
                    valeur: v,
                    description: "random()".to_string(),
                });
            }
        }
    }

    /// Ajoute (ou remplace) une opération unaire pure ; description `symbole(x)`.
    ///
    /// Les effets de bord (couleur, etc.) restent côté appelant : il inspecte
    /// le symbole après `executer`.
    pub fn ajouter_unaire(&mut self, symbole: &str, f: impl Fn(f64) -> f64 + 'static) {
        debug!(symbole, "opération unaire enregistrée");
        self.registre.ajouter_unaire(symbole, f);
    }

    /// Remise à zéro totale : accumulateur + attente.
    pub fn clear_tout(&mut self) {
        self.accumulateur = None;
        self.en_attente = None;
    }

    /// "=" : n’agit que si une attente ET un second opérande existent.
    fn resoudre_attente(&mut self) {
        let r = match (&self.en_attente, &self.accumulateur) {
            (Some(attente), Some(second)) => attente.appliquer(second),
            _ => return,
        };
        trace!(description = %r.description, valeur = r.valeur, "attente résolue");
        self.accumulateur = Some(r);
        self.en_attente = None;
    }

    /* ------------------------ Lectures ------------------------ */

    pub fn resultat(&self) -> Option<f64> {
        self.accumulateur.as_ref().map(|a| a.valeur)
    }

    pub fn resultat_en_attente(&self) -> bool {
        self.en_attente.is_some()
    }

    /// En attente : `d(premier, second ou "")` (ex: "3+").
    /// Sinon : description de l’accumulateur.
    pub fn description(&self) -> Option<String> {
        match &self.en_attente {
            Some(_) => self.description_en_attente(),
            None => self.accumulateur.as_ref().map(|a| a.description.clone()),
        }
    }

    fn description_en_attente(&self) -> Option<String> {
        let attente = self.en_attente.as_ref()?;
        let second = self
            .accumulateur
            .as_ref()
            .map(|a| a.description.as_str())
            .unwrap_or("");
        Some((attente.description)(&attente.premier.description, second))
    }

    pub fn registre(&self) -> &Registre {
        &self.registre
    }
}
