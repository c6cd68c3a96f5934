// src/noyau/format.rs
//
// Affichage numérique : arrondi à N chiffres significatifs, sans zéros
// traînants, écriture scientifique seulement aux magnitudes illisibles.

/// Formate `valeur` à `chiffres` chiffres significatifs.
/// `None` si la valeur n'est pas représentable (NaN, ±inf).
pub fn formater_significatif(valeur: f64, chiffres: usize) -> Option<String> {
    if !valeur.is_finite() {
        return None;
    }
    if valeur == 0.0 {
        return Some("0".to_string());
    }

    // Arrondi via la notation scientifique (précision = chiffres - 1),
    // puis re-parse : f64::to_string rend ensuite l'écriture la plus courte.
    let chiffres = chiffres.max(1);
    let arrondi: f64 = format!("{:.*e}", chiffres - 1, valeur).parse().ok()?;
    if arrondi == 0.0 {
        return Some("0".to_string());
    }

    let magnitude = arrondi.abs().log10().floor() as i32;
    if !(-10..15).contains(&magnitude) {
        return Some(format!("{arrondi:e}"));
    }
    Some(arrondi.to_string())
}

#[cfg(test)]
mod tests {
    use super::formater_significatif;

    fn f14(v: f64) -> String {
        formater_significatif(v, 14).expect("valeur représentable")
    }

    #[test]
    fn entiers_sans_decimales() {
        assert_eq!(f14(4.0), "4");
        assert_eq!(f14(-120.0), "-120");
        assert_eq!(f14(0.0), "0");
        assert_eq!(f14(-0.0), "0");
    }

    #[test]
    fn arrondi_a_quatorze_chiffres() {
        // sin(90°) calculé en f64 vaut 0.9999999999999999 : s'affiche "1"
        assert_eq!(f14(0.999_999_999_999_999_9), "1");
        // le bruit binaire de 0.1+0.2 disparaît
        assert_eq!(f14(0.1 + 0.2), "0.3");
        assert_eq!(f14(1.0 / 3.0), "0.33333333333333");
    }

    #[test]
    fn magnitudes_extremes_en_notation_scientifique() {
        assert_eq!(f14(1.5e20), "1.5e20");
        assert_eq!(f14(2.0e-12), "2e-12");
    }

    #[test]
    fn non_representable() {
        assert!(formater_significatif(f64::NAN, 14).is_none());
        assert!(formater_significatif(f64::INFINITY, 14).is_none());
        assert!(formater_significatif(f64::NEG_INFINITY, 14).is_none());
    }
}
