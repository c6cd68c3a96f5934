//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la session de calcul (noyau) et mapper le clavier
//! physique sur ses opérations. Pas de champ texte libre : toute la
//! saisie passe par les règles du noyau, boutons et clavier confondus.

use crate::noyau::Session;

pub struct AppCalc {
    pub session: Session,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            session: Session::nouvelle(),
        }
    }
}

impl AppCalc {
    /// Mappe un caractère tapé au clavier sur l'opération de session.
    /// Les caractères hors pavé sont ignorés en silence.
    pub fn touche_clavier(&mut self, c: char) {
        match c {
            '=' => self.session.evaluer(),
            c if c.is_ascii_digit() => self.session.ajouter_jeton(&c.to_string()),
            '+' | '-' | '*' | '/' | '^' | '%' | '(' | ')' | '.' | '!' | ',' => {
                self.session.ajouter_jeton(&c.to_string());
            }
            _ => {}
        }
    }
}
