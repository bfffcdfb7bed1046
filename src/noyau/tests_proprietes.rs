//! Tests de propriétés (campagne) : invariants du cerveau sur beaucoup d’entrées.
//!
//! - valeurs bornées + valeurs spéciales IEEE-754
//! - graine fixe (reproductible)
//! - budget temps global (anti-gel)

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::format::format_nombre;
use super::Cerveau;

const TIRAGES: usize = 2_000;

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/// Valeurs “pièges” + tirages pseudo-aléatoires de magnitudes variées.
fn valeurs(graine: u64) -> Vec<f64> {
    let mut v = vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        0.5,
        1e-9,
        -1e-9,
        1e15,
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];
    let mut rng = StdRng::seed_from_u64(graine);
    for _ in 0..TIRAGES {
        let mantisse: f64 = rng.gen_range(-1.0..1.0);
        let exposant: i32 = rng.gen_range(-6..=12);
        v.push(mantisse * 10f64.powi(exposant));
    }
    v
}

#[test]
fn prop_set_operande_resultat_et_description() {
    let t0 = Instant::now();
    let mut c = Cerveau::avec_graine(1);

    for v in valeurs(11) {
        c.set_operande(v);
        assert_eq!(c.resultat().map(f64::to_bits), Some(v.to_bits()), "v={v:?}");
        assert_eq!(c.description(), Some(format_nombre(v)), "v={v:?}");
        budget(t0, Duration::from_secs(2));
    }
}

#[test]
fn prop_set_operande_nan() {
    let mut c = Cerveau::avec_graine(1);
    c.set_operande(f64::NAN);
    assert!(c.resultat().is_some_and(f64::is_nan));
    assert_eq!(c.description().as_deref(), Some("NaN"));
}

#[test]
fn prop_clear_tout_apres_sequence_quelconque() {
    let t0 = Instant::now();
    let symboles = ["+", "×", "÷", "−", "=", "√", "±", "π", "Random", "inconnu"];
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..200 {
        let mut c = Cerveau::avec_graine(rng.gen());
        for _ in 0..rng.gen_range(0..20) {
            if rng.gen_bool(0.4) {
                c.set_operande(rng.gen_range(-100.0..100.0));
            } else {
                c.executer(symboles[rng.gen_range(0..symboles.len())]);
            }
        }
        c.clear_tout();
        assert_eq!(c.resultat(), None);
        assert!(!c.resultat_en_attente());
        assert_eq!(c.description(), None);
        budget(t0, Duration::from_secs(2));
    }
}

#[test]
fn prop_attente_coherente_avec_description() {
    // en attente => la description se termine par l’opérateur tant que le second manque
    let mut rng = StdRng::seed_from_u64(5);
    for (symbole, texte) in [("+", "+"), ("×", "*"), ("÷", "/"), ("−", "-")] {
        let a = rng.gen_range(1.0f64..50.0).round();
        let mut c = Cerveau::avec_graine(0);
        c.set_operande(a);
        c.executer(symbole);
        assert!(c.resultat_en_attente());
        assert_eq!(c.description(), Some(format!("{}{texte}", format_nombre(a))));
    }
}

#[test]
fn prop_binaires_arithmetique_ieee() {
    let t0 = Instant::now();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..TIRAGES {
        let a: f64 = rng.gen_range(-1e6..1e6);
        let b: f64 = rng.gen_range(-1e6..1e6);

        for (symbole, attendu) in [("+", a + b), ("−", a - b), ("×", a * b), ("÷", a / b)] {
            let mut c = Cerveau::avec_graine(0);
            c.set_operande(a);
            c.executer(symbole);
            c.set_operande(b);
            c.executer("=");
            assert_eq!(c.resultat(), Some(attendu), "{a} {symbole} {b}");
            assert!(!c.resultat_en_attente());
        }
        budget(t0, Duration::from_secs(3));
    }
}

#[test]
fn prop_unaire_personnalisee_comme_integree() {
    // "maracine" == "√" pour la valeur, et même forme de description
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let v: f64 = rng.gen_range(0.0..1e4);

        let mut a = Cerveau::avec_graine(0);
        a.set_operande(v);
        a.executer("√");

        let mut b = Cerveau::avec_graine(0);
        b.ajouter_unaire("maracine", f64::sqrt);
        b.set_operande(v);
        b.executer("maracine");

        assert_eq!(a.resultat(), b.resultat());
        let da = a.description().unwrap_or_default();
        let db = b.description().unwrap_or_default();
        assert_eq!(da.trim_start_matches('√'), db.trim_start_matches("maracine"));
    }
}

#[test]
fn prop_aleatoire_ignore_etat_precedent() {
    let mut c = Cerveau::avec_graine(8);
    c.set_operande(123.0);
    c.executer("√");
    c.executer("Random");
    assert_eq!(c.description().as_deref(), Some("random()"));
    assert!(c.resultat().is_some_and(|v| (0.0..1.0).contains(&v)));
}
