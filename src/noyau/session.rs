// src/noyau/session.rs
//
// Session de calcul : l'état complet d'une calculatrice, sous forme
// d'objet explicite (pas de globals) — entrée, dernière réponse, mode
// d'angle, historique, indicateur d'erreur.
//
// Contrats :
// - chaque opération s'exécute d'un trait, mono-thread ;
// - toute opération d'ÉDITION (jeton, effacement, remise à zéro,
//   rappel d'historique) efface l'indicateur d'erreur ;
// - un échec d'évaluation ne modifie NI l'entrée, NI Ans, NI l'historique ;
// - la remise à zéro conserve Ans et l'historique.

use log::{debug, warn};

use super::angle::ModeAngle;
use super::eval::evaluer_expression;
use super::historique::{EntreeHistorique, Historique};
use super::moteur::{Evaluateur, MoteurMeval};
use super::saisie::{self, ENTREE_DEFAUT};

/// Message unique côté utilisateur : pas de taxonomie plus fine.
pub const MESSAGE_ERREUR: &str = "Expression invalide";

pub struct Session<M = MoteurMeval> {
    entree: String,
    derniere_reponse: String,
    mode_angle: ModeAngle,
    historique: Historique,
    erreur: bool,
    moteur: M,
}

impl Session<MoteurMeval> {
    pub fn nouvelle() -> Self {
        Self::avec_moteur(MoteurMeval)
    }
}

impl Default for Session<MoteurMeval> {
    fn default() -> Self {
        Self::nouvelle()
    }
}

impl<M: Evaluateur> Session<M> {
    /// Démarre une session sur un moteur arbitraire (voir moteur.rs).
    pub fn avec_moteur(moteur: M) -> Self {
        Self {
            entree: ENTREE_DEFAUT.to_string(),
            derniere_reponse: "0".to_string(),
            mode_angle: ModeAngle::default(),
            historique: Historique::default(),
            erreur: false,
            moteur,
        }
    }

    /* ------------------------ Lectures ------------------------ */

    pub fn entree(&self) -> &str {
        &self.entree
    }

    pub fn derniere_reponse(&self) -> &str {
        &self.derniere_reponse
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.mode_angle
    }

    pub fn historique(&self) -> &[EntreeHistorique] {
        self.historique.entrees()
    }

    pub fn en_erreur(&self) -> bool {
        self.erreur
    }

    /* ------------------------ Éditions ------------------------ */

    pub fn ajouter_jeton(&mut self, jeton: &str) {
        self.erreur = false;
        saisie::ajouter_jeton(&mut self.entree, jeton);
    }

    pub fn effacer_dernier(&mut self) {
        self.erreur = false;
        saisie::effacer_dernier(&mut self.entree);
    }

    /// Remise à zéro de l'entrée seule ; Ans et l'historique survivent.
    pub fn reinitialiser(&mut self) {
        self.erreur = false;
        self.entree.clear();
        self.entree.push_str(ENTREE_DEFAUT);
    }

    pub fn basculer_mode_angle(&mut self) {
        self.mode_angle = self.mode_angle.bascule();
    }

    /// Recopie la valeur d'une entrée d'historique dans l'entrée courante.
    /// Index hors bornes : absorbé en silence, comme une saisie illégale.
    pub fn selectionner_historique(&mut self, index: usize) {
        if let Some(e) = self.historique.entree(index) {
            self.entree = e.valeur.clone();
            self.erreur = false;
        }
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Opération "=". Sur succès : Ans, historique et entrée prennent la
    /// valeur formatée (le calcul suivant enchaîne sur le résultat). Sur
    /// échec : état intact, indicateur d'erreur levé jusqu'à la prochaine
    /// édition. "=" répété ré-évalue l'entrée telle quelle.
    pub fn evaluer(&mut self) {
        match evaluer_expression(
            &self.entree,
            self.mode_angle,
            &self.derniere_reponse,
            &self.moteur,
        ) {
            Ok(valeur) => {
                debug!("évaluation: {:?} => {valeur}", self.entree);
                self.historique.ajouter(self.entree.clone(), valeur.clone());
                self.derniere_reponse = valeur.clone();
                self.entree = valeur;
                self.erreur = false;
            }
            Err(e) => {
                warn!("évaluation refusée: {:?} ({e})", self.entree);
                self.erreur = true;
            }
        }
    }
}
