//! Noyau de la calculatrice de poche
//!
//! Organisation interne :
//! - operation.rs : variantes d’opérations + registre symbole -> Operation
//! - cerveau.rs   : accumulateur, opération en attente, description
//! - format.rs    : affichage d’un f64 (entier / 4 décimales, sans locale)

pub mod cerveau;
pub mod format;
pub mod operation;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use cerveau::Cerveau;
pub use format::format_nombre;
