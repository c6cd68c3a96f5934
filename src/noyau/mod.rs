//! Noyau calculatrice
//!
//! Organisation interne :
//! - angle.rs      : mode d'angle + conversions rad/deg
//! - saisie.rs     : règles de saisie contextuelles (pavé)
//! - portee.rs     : liaisons nommées fournies au moteur (trig, log, Ans…)
//! - moteur.rs     : frontière moteur externe (trait + adaptateur meval)
//! - format.rs     : affichage à 14 chiffres significatifs
//! - eval.rs       : assainissement + pipeline "="
//! - historique.rs : journal borné des évaluations réussies
//! - session.rs    : l'état complet + opérations publiques

pub mod angle;
pub mod eval;
pub mod format;
pub mod historique;
pub mod moteur;
pub mod portee;
pub mod saisie;
pub mod session;

#[cfg(test)]
mod tests_session;

// API publique minimale
pub use angle::ModeAngle;
pub use historique::EntreeHistorique;
pub use session::{Session, MESSAGE_ERREUR};
