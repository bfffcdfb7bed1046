//! Noyau — opérations et registre (symbole -> Operation)
//!
//! Une opération est immuable une fois enregistrée.
//! Les fonctions sont partagées par `Rc` : l’opération en attente garde
//! une copie de la fonction binaire sans toucher au registre.
//! Pas de `Send`/`Sync` : le cerveau vit sur le fil UI.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

pub type FnUnaire = Rc<dyn Fn(f64) -> f64>;
pub type FnBinaire = Rc<dyn Fn(f64, f64) -> f64>;
pub type DescUnaire = Rc<dyn Fn(&str) -> String>;
pub type DescBinaire = Rc<dyn Fn(&str, &str) -> String>;

/// Symbole de l’aléatoire (description : "random()").
pub const SYMBOLE_RANDOM: &str = "Random";

/// Symbole de résolution.
pub const SYMBOLE_EGAL: &str = "=";

#[derive(Clone)]
pub enum Operation {
    Constante(f64),
    Unaire(FnUnaire, DescUnaire),
    Binaire(FnBinaire, DescBinaire),
    Aleatoire,
    Egal,
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Constante(v) => f.debug_tuple("Constante").field(v).finish(),
            Operation::Unaire(..) => f.write_str("Unaire(..)"),
            Operation::Binaire(..) => f.write_str("Binaire(..)"),
            Operation::Aleatoire => f.write_str("Aleatoire"),
            Operation::Egal => f.write_str("Egal"),
        }
    }
}

/* ------------------------ Constructeurs ------------------------ */

/// Unaire dont la description est `nom(x)`.
fn unaire_nommee(nom: &str, f: impl Fn(f64) -> f64 + 'static) -> Operation {
    let nom = nom.to_string();
    Operation::Unaire(Rc::new(f), Rc::new(move |x: &str| format!("{nom}({x})")))
}

/// Binaire dont la description est `a<op>b`.
fn binaire_infixe(op: &'static str, f: impl Fn(f64, f64) -> f64 + 'static) -> Operation {
    Operation::Binaire(Rc::new(f), Rc::new(move |a: &str, b: &str| format!("{a}{op}{b}")))
}

/* ------------------------ Registre ------------------------ */

#[derive(Clone, Debug)]
pub struct Registre {
    operations: HashMap<String, Operation>,
}

impl Default for Registre {
    fn default() -> Self {
        use std::f64::consts::{E, PI};

        let mut r = Self {
            operations: HashMap::new(),
        };

        // Constantes
        r.inserer("π", Operation::Constante(PI));
        r.inserer("e", Operation::Constante(E));

        // Unaires
        r.inserer("√", unaire_nommee("√", f64::sqrt));
        r.inserer("cos", unaire_nommee("cos", f64::cos));
        r.inserer("sin", unaire_nommee("sin", f64::sin));
        r.inserer("tan", unaire_nommee("tan", f64::tan));
        // ln -> "log(x)", log -> "log10(x)" (notation des fonctions, pas des boutons)
        r.inserer("ln", unaire_nommee("log", f64::ln));
        r.inserer("log", unaire_nommee("log10", f64::log10));
        // ± : la description montre le signe, pas le symbole du bouton
        r.inserer("±", unaire_nommee("-", |x| -x));

        // Binaires (description ASCII : "3*4", "3/4")
        r.inserer("×", binaire_infixe("*", |a, b| a * b));
        r.inserer("÷", binaire_infixe("/", |a, b| a / b));
        r.inserer("+", binaire_infixe("+", |a, b| a + b));
        r.inserer("−", binaire_infixe("-", |a, b| a - b));
        r.inserer("-", binaire_infixe("-", |a, b| a - b));

        // Spéciales
        r.inserer(SYMBOLE_RANDOM, Operation::Aleatoire);
        r.inserer(SYMBOLE_EGAL, Operation::Egal);

        r
    }
}

impl Registre {
    fn inserer(&mut self, symbole: &str, op: Operation) {
        self.operations.insert(symbole.to_string(), op);
    }

    pub fn get(&self, symbole: &str) -> Option<&Operation> {
        self.operations.get(symbole)
    }

    pub fn contient(&self, symbole: &str) -> bool {
        self.operations.contains_key(symbole)
    }

    /// Ajoute (ou remplace) une opération unaire ; description `symbole(x)`.
    /// Aucune suppression possible.
    pub fn ajouter_unaire(&mut self, symbole: &str, f: impl Fn(f64) -> f64 + 'static) {
        self.inserer(symbole, unaire_nommee(symbole, f));
    }

    /// Symboles connus, triés (ordre stable pour l’UI et les tests).
    pub fn symboles(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}
