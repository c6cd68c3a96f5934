// src/noyau/angle.rs
//
// Unité d'angle + conversions pures radians/degrés.
// -------------------------------------------------
// Le mode n'influence QUE les liaisons trig de la portée (portee.rs) :
// il ne touche jamais à l'entrée ni à l'historique.

use std::f64::consts::PI;

/// Unité d'angle de la session. Radians au démarrage.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ModeAngle {
    #[default]
    Radians,
    Degres,
}

impl ModeAngle {
    /// Bascule RAD <-> DEG (action utilisateur).
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Radians => ModeAngle::Degres,
            ModeAngle::Degres => ModeAngle::Radians,
        }
    }

    /// Étiquette courte pour le bouton de bascule.
    pub fn etiquette(self) -> &'static str {
        match self {
            ModeAngle::Radians => "RAD",
            ModeAngle::Degres => "DEG",
        }
    }
}

pub fn degres_en_radians(x: f64) -> f64 {
    x * (PI / 180.0)
}

pub fn radians_en_degres(x: f64) -> f64 {
    x * (180.0 / PI)
}
