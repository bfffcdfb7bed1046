// src/noyau/format.rs
//
// Affichage d’un f64 (indépendant de la locale) :
// - entier        -> aucun chiffre après la virgule ("3")
// - non entier    -> au plus 4 décimales, arrondi, zéros finaux retirés ("3.1416")
// - au moins 1 chiffre entier ("0.5", jamais ".5")
// - séparateur '.', pas de groupement des milliers

/// Nombre maximal de décimales affichées.
const DECIMALES_MAX: usize = 4;

/// Formate un nombre pour l’affichage ET pour la description du cerveau.
///
/// Valeurs spéciales IEEE-754 : "NaN", "∞", "-∞".
/// -0 (ou tout ce qui s’arrondit à zéro) s’affiche "0".
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let s = if v % 1.0 == 0.0 {
        format!("{v:.0}")
    } else {
        let brut = format!("{v:.prec$}", prec = DECIMALES_MAX);
        sans_zeros_finaux(&brut).to_string()
    };

    // "-0" (ex: -0.0, -0.00001) : pas de signe sur zéro
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

/// "2.5000" -> "2.5" ; "2.0000" -> "2" (suppose un point décimal présent).
fn sans_zeros_finaux(s: &str) -> &str {
    s.trim_end_matches('0').trim_end_matches('.')
}
