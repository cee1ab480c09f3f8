//! Noyau flottant (shunting-yard, une passe)
//!
//! Organisation interne :
//! - erreur.rs       : taxonomie des erreurs (Display = message affiché)
//! - config.rs       : dimensionnement (piles, écran) + mode d’angle
//! - operateur.rs    : opérateurs binaires, fonctions (codes à un caractère), précédences
//! - pile.rs         : piles à capacité fixe (cumul d’empilements côté opérateurs)
//! - jetons.rs       : tokenisation à la demande
//! - application.rs  : application d’un opérateur (NaN + erreur, pile toujours équilibrée)
//! - format.rs       : rendu du résultat
//! - calculatrice.rs : instance + pilote

pub mod application;
pub mod calculatrice;
pub mod config;
pub mod erreur;
pub mod format;
pub mod jetons;
pub mod operateur;
pub mod pile;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::Calculatrice;
pub use config::ModeAngle;
