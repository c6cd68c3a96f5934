// src/noyau/historique.rs
//
// Historique borné des évaluations réussies.
// ------------------------------------------
// - Plus récent en tête, plafonné : au-delà, le plus ancien tombe.
// - Les entrées sont immuables ; aucune édition, aucune suppression ciblée.
// - "Sélectionner" est une lecture : la valeur stockée est recopiée dans
//   l'entrée par la session, l'historique lui-même ne bouge pas.

/// Plafond d'entrées conservées.
pub const HISTORIQUE_MAX: usize = 10;

/// Une évaluation réussie : expression telle que tapée + valeur affichée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub valeur: String,
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    /// Insère en tête et tronque au plafond.
    pub fn ajouter(&mut self, expression: String, valeur: String) {
        self.entrees.insert(0, EntreeHistorique { expression, valeur });
        self.entrees.truncate(HISTORIQUE_MAX);
    }

    pub fn entree(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }

    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }
}
