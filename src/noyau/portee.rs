// src/noyau/portee.rs
//
// Portée d'évaluation : les liaisons nommées fournies au moteur externe.
// ----------------------------------------------------------------------
// - sin/cos/tan : argument converti degrés -> radians en mode DEG.
// - asin/acos/atan : résultat converti radians -> degrés en mode DEG.
// - ln, log (base 10 à un argument, base explicite à deux), sqrt.
// - fact : factoriel entier, cible de la réécriture `x!` (eval.rs).
// - Ans : constante, valeur numérique de la dernière réponse.
//
// Les liaisons sont exprimées sans rien supposer du moteur (constante,
// fonction unaire, fonction à arité variable) ; l'adaptateur moteur.rs
// les traduit dans le vocabulaire de la bibliothèque choisie.
//
// Les erreurs de domaine (asin hors [-1,1], log d'un négatif…) ne sont
// pas interceptées ici : elles produisent un NaN ou un échec du moteur,
// classé uniformément par le pipeline d'évaluation.

use std::ops::Range;

use super::angle::{degres_en_radians, radians_en_degres, ModeAngle};

/// Une liaison nommée consommée par le moteur.
#[derive(Clone)]
pub enum Liaison {
    Constante(f64),
    Fonction(fn(f64) -> f64),
    /// Fonction à arité variable, avec la plage d'arités admise.
    FonctionN(fn(&[f64]) -> f64, Range<usize>),
}

/// Ensemble des liaisons exposées pour UNE évaluation.
#[derive(Clone, Default)]
pub struct Portee {
    liaisons: Vec<(&'static str, Liaison)>,
}

impl Portee {
    pub fn liaisons(&self) -> &[(&'static str, Liaison)] {
        &self.liaisons
    }
}

/// Construit la portée d'évaluation pour le mode d'angle courant et la
/// dernière réponse.
pub fn portee_evaluation(mode: ModeAngle, derniere_reponse: f64) -> Portee {
    type F = fn(f64) -> f64;

    let (sin, cos, tan, asin, acos, atan): (F, F, F, F, F, F) = match mode {
        ModeAngle::Radians => (f64::sin, f64::cos, f64::tan, f64::asin, f64::acos, f64::atan),
        ModeAngle::Degres => (sin_deg, cos_deg, tan_deg, asin_deg, acos_deg, atan_deg),
    };

    Portee {
        liaisons: vec![
            ("sin", Liaison::Fonction(sin)),
            ("cos", Liaison::Fonction(cos)),
            ("tan", Liaison::Fonction(tan)),
            ("asin", Liaison::Fonction(asin)),
            ("acos", Liaison::Fonction(acos)),
            ("atan", Liaison::Fonction(atan)),
            ("ln", Liaison::Fonction(f64::ln)),
            ("sqrt", Liaison::Fonction(f64::sqrt)),
            ("log", Liaison::FonctionN(log_n, 1..3)),
            ("fact", Liaison::Fonction(factorielle)),
            ("Ans", Liaison::Constante(derniere_reponse)),
        ],
    }
}

/* ------------------------ Variantes degrés ------------------------ */

fn sin_deg(x: f64) -> f64 {
    degres_en_radians(x).sin()
}
fn cos_deg(x: f64) -> f64 {
    degres_en_radians(x).cos()
}
fn tan_deg(x: f64) -> f64 {
    degres_en_radians(x).tan()
}
fn asin_deg(x: f64) -> f64 {
    radians_en_degres(x.asin())
}
fn acos_deg(x: f64) -> f64 {
    radians_en_degres(x.acos())
}
fn atan_deg(x: f64) -> f64 {
    radians_en_degres(x.atan())
}

/// log(x) = base 10 ; log(x, b) = base b. Arité hors plage -> NaN
/// (classé "expression invalide" au formatage).
fn log_n(args: &[f64]) -> f64 {
    match args {
        [x] => x.log10(),
        [x, base] => x.log(*base),
        _ => f64::NAN,
    }
}

/// Factoriel entier : cible de la réécriture `x!` -> `fact(x)` (eval.rs).
/// Hors domaine (négatif, non entier) ou hors f64 (171! et au-delà) -> NaN.
fn factorielle(x: f64) -> f64 {
    if x < 0.0 || x.fract() != 0.0 || x > 170.0 {
        return f64::NAN;
    }
    let mut acc = 1.0_f64;
    let mut k = 2.0_f64;
    while k <= x {
        acc *= k;
        k += 1.0;
    }
    acc
}
