// src/noyau/saisie.rs
//
// Règles de saisie (pavé tactile) — grammaire contextuelle de l'entrée.
// ---------------------------------------------------------------------
// Contrat : on ne peut pas TAPER quelque chose de cassé. Un jeton illégal
// dans le contexte courant est absorbé en silence (entrée inchangée), ce
// n'est PAS une erreur. La validité complète de l'expression n'est jugée
// qu'au moment de l'évaluation, par le moteur externe.
//
// Invariant : l'entrée n'est jamais vide ; "vide" se représente "0".

/// Entrée par défaut (affichée au démarrage et après remise à zéro).
pub const ENTREE_DEFAUT: &str = "0";

/// Opérateurs binaires + exposant + pourcent : un `!` ne peut pas les suivre.
const OPERATEURS: [char; 6] = ['+', '-', '*', '/', '^', '%'];

/// Caractères qui terminent un nombre (pour la règle "un seul point").
const SEPARATEURS_NOMBRE: [char; 8] = ['+', '-', '*', '/', '^', '%', '(', ')'];

/// Jetons-constantes du pavé : remplacent l'entrée par défaut au lieu de s'y coller.
const CONSTANTES: [&str; 3] = ["π", "e", "Ans"];

/// Ajoute un jeton du pavé à l'entrée, selon les règles contextuelles.
///
/// Ordre des règles :
/// 1. entrée == "0" : chiffre/point/constante/moins unaire/ouverture de
///    fonction REMPLACENT l'entrée ; tout autre jeton se colle après le
///    zéro ("0" + jeton) — passage voulu pour un opérateur tapé juste
///    après une remise à zéro.
/// 2. "!" refusé après un opérateur (un factoriel suit un opérande).
/// 3. "." refusé si le nombre en cours en contient déjà un.
/// 4. sinon : concaténation telle quelle.
pub fn ajouter_jeton(entree: &mut String, jeton: &str) {
    if jeton.is_empty() {
        return;
    }

    if entree == ENTREE_DEFAUT && demarre_une_saisie(jeton) {
        entree.clear();
        entree.push_str(jeton);
        return;
    }

    if jeton == "!" && entree.ends_with(&OPERATEURS[..]) {
        return; // rejet silencieux
    }

    if jeton == "." && nombre_courant_a_un_point(entree) {
        return; // rejet silencieux : un seul point par nombre
    }

    entree.push_str(jeton);
}

/// Efface le dernier caractère ; plancher à "0" (jamais vide).
pub fn effacer_dernier(entree: &mut String) {
    entree.pop();
    if entree.is_empty() {
        entree.push_str(ENTREE_DEFAUT);
    }
}

/// Un jeton qui "démarre" une saisie remplace l'entrée par défaut :
/// chiffre seul, point décimal, constante nommée / Ans, moins unaire,
/// ou fragment ouvrant une fonction ("sin(", "ln(", ...).
fn demarre_une_saisie(jeton: &str) -> bool {
    let chiffre_ou_point =
        jeton.len() == 1 && jeton.chars().all(|c| c.is_ascii_digit() || c == '.');

    chiffre_ou_point || CONSTANTES.contains(&jeton) || jeton == "-" || jeton.ends_with('(')
}

/// Vrai si le nombre en cours de frappe (depuis le dernier opérateur,
/// parenthèse ou pourcent) contient déjà un point décimal.
fn nombre_courant_a_un_point(entree: &str) -> bool {
    let debut = entree
        .rfind(|c: char| SEPARATEURS_NOMBRE.contains(&c))
        .map_or(0, |i| i + 1);
    entree[debut..].contains('.')
}
