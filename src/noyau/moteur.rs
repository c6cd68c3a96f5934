// src/noyau/moteur.rs
//
// Frontière avec le moteur d'expressions externe.
// -----------------------------------------------
// Le noyau ne connaît du moteur que cette capacité étroite :
//   évaluer(expression, portée) -> valeur ou échec
//   formater(valeur, chiffres)  -> chaîne ou échec
// Toute bibliothèque conforme (arithmétique, parenthèses, ^, constantes
// nommées, liaisons utilisateur) peut se brancher ici. Le moteur reçoit
// la forme ASSAINIE (eval.rs) : ni %, ni Ans, ni ! postfixe — le
// factoriel arrive en appel `fact(…)`, lié par la portée.
//
// Implémentation fournie : meval.

use thiserror::Error;

use super::format::formater_significatif;
use super::portee::{Liaison, Portee};

/// Échec à la frontière du moteur. Côté utilisateur, tout se replie sur
/// un seul indicateur "expression invalide" ; le détail ne sert qu'aux
/// journaux.
#[derive(Debug, Error)]
pub enum ErreurEvaluation {
    #[error("syntaxe rejetée par le moteur : {0}")]
    Syntaxe(String),
    #[error("échec d'évaluation : {0}")]
    Calcul(String),
    #[error("résultat non représentable")]
    Formatage,
}

/// Capacité minimale exigée du moteur d'expressions.
pub trait Evaluateur {
    fn evaluer(&self, expression: &str, portee: &Portee) -> Result<f64, ErreurEvaluation>;

    fn formater(&self, valeur: f64, chiffres: usize) -> Result<String, ErreurEvaluation>;
}

/// Adaptateur meval : traduit la portée en `meval::Context` puis délègue.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoteurMeval;

impl Evaluateur for MoteurMeval {
    fn evaluer(&self, expression: &str, portee: &Portee) -> Result<f64, ErreurEvaluation> {
        let expr: meval::Expr = expression
            .parse()
            .map_err(|e: meval::Error| ErreurEvaluation::Syntaxe(e.to_string()))?;

        let mut contexte = meval::Context::new();
        for (nom, liaison) in portee.liaisons() {
            match liaison {
                Liaison::Constante(v) => {
                    contexte.var(*nom, *v);
                }
                Liaison::Fonction(f) => {
                    contexte.func(*nom, *f);
                }
                Liaison::FonctionN(f, arites) => {
                    contexte.funcn(*nom, *f, arites.clone());
                }
            }
        }

        expr.eval_with_context(contexte)
            .map_err(|e| ErreurEvaluation::Calcul(e.to_string()))
    }

    fn formater(&self, valeur: f64, chiffres: usize) -> Result<String, ErreurEvaluation> {
        formater_significatif(valeur, chiffres).ok_or(ErreurEvaluation::Formatage)
    }
}
