//! Campagne session : les propriétés observables de la calculatrice,
//! jouées au niveau des opérations publiques (jetons, =, DEL, AC,
//! bascule d'angle, historique).
//!
//! Notes :
//! - le moteur réel (meval) est branché : ces tests couvrent aussi la
//!   traduction de la portée et le formatage à 14 chiffres ;
//! - aucune propriété ne dépend du hasard ni du temps.

use super::historique::HISTORIQUE_MAX;
use super::session::Session;

fn session() -> Session {
    Session::nouvelle()
}

/// Tape une suite de jetons (un caractère = un jeton, sauf mots passés tels quels).
fn taper(s: &mut Session, jetons: &[&str]) {
    for j in jetons {
        s.ajouter_jeton(j);
    }
}

fn taper_et_evaluer(s: &mut Session, jetons: &[&str]) -> String {
    s.reinitialiser();
    taper(s, jetons);
    s.evaluer();
    s.entree().to_string()
}

/* ------------------------ Saisie au niveau session ------------------------ */

#[test]
fn premiere_touche_remplace_le_zero() {
    let mut s = session();
    s.ajouter_jeton("5");
    assert_eq!(s.entree(), "5");

    s.reinitialiser();
    s.ajouter_jeton("+");
    assert_eq!(s.entree(), "0+"); // passage voulu après remise à zéro
}

#[test]
fn effacement_plancher_a_zero() {
    let mut s = session();
    s.ajouter_jeton("7");
    s.effacer_dernier();
    assert_eq!(s.entree(), "0");
    s.effacer_dernier();
    assert_eq!(s.entree(), "0");
}

/* ------------------------ Évaluations de base ------------------------ */

#[test]
fn deux_plus_deux_dans_les_deux_modes() {
    let mut s = session();
    assert_eq!(taper_et_evaluer(&mut s, &["2", "+", "2"]), "4");

    s.basculer_mode_angle();
    assert_eq!(taper_et_evaluer(&mut s, &["2", "+", "2"]), "4");
}

#[test]
fn trig_selon_le_mode_d_angle() {
    let mut s = session();
    // RAD (mode par défaut)
    assert_eq!(taper_et_evaluer(&mut s, &["sin(", "0", ")"]), "0");

    s.basculer_mode_angle(); // DEG
    assert_eq!(taper_et_evaluer(&mut s, &["sin(", "9", "0", ")"]), "1");
    assert_eq!(taper_et_evaluer(&mut s, &["cos(", "6", "0", ")"]), "0.5");
    // trig inverse : résultat reconverti en degrés
    assert_eq!(taper_et_evaluer(&mut s, &["asin(", "1", ")"]), "90");
}

#[test]
fn factoriel_exposant_pourcent() {
    let mut s = session();
    assert_eq!(taper_et_evaluer(&mut s, &["5", "!"]), "120");
    assert_eq!(taper_et_evaluer(&mut s, &["2", "^", "1", "0"]), "1024");
    assert_eq!(taper_et_evaluer(&mut s, &["5", "0", "%"]), "0.5");
}

#[test]
fn factoriel_d_un_groupe_et_itere() {
    let mut s = session();
    assert_eq!(taper_et_evaluer(&mut s, &["(", "2", "+", "3", ")", "!"]), "120");
    assert_eq!(taper_et_evaluer(&mut s, &["3", "!", "!"]), "720");
}

#[test]
fn factoriel_hors_domaine_est_un_echec() {
    let mut s = session();
    taper(&mut s, &["2", ".", "5", "!"]);
    s.evaluer();
    assert!(s.en_erreur());
    assert_eq!(s.entree(), "2.5!"); // entrée intacte
}

#[test]
fn logarithmes() {
    let mut s = session();
    assert_eq!(taper_et_evaluer(&mut s, &["log(", "1", "0", "0", ")"]), "2");
    assert_eq!(
        taper_et_evaluer(&mut s, &["log(", "8", ",", "2", ")"]),
        "3"
    );
    assert_eq!(taper_et_evaluer(&mut s, &["ln(", "e", ")"]), "1");
    assert_eq!(taper_et_evaluer(&mut s, &["sqrt(", "4", ")"]), "2");
}

#[test]
fn pi_du_pave() {
    let mut s = session();
    assert_eq!(taper_et_evaluer(&mut s, &["cos(", "π", ")"]), "-1");
}

/* ------------------------ Enchaînement Ans ------------------------ */

#[test]
fn enchainement_ans() {
    let mut s = session();
    assert_eq!(taper_et_evaluer(&mut s, &["2", "+", "2"]), "4");
    assert_eq!(s.derniere_reponse(), "4");

    // "Ans" remplace l'entrée par défaut, puis participe au calcul
    assert_eq!(taper_et_evaluer(&mut s, &["Ans", "+", "1"]), "5");
    assert_eq!(s.derniere_reponse(), "5");
}

#[test]
fn le_resultat_devient_l_entree() {
    let mut s = session();
    taper_et_evaluer(&mut s, &["6", "*", "7"]);
    assert_eq!(s.entree(), "42");

    // calcul en chaîne sans Ans : on continue sur le résultat affiché
    taper(&mut s, &["+", "8"]);
    s.evaluer();
    assert_eq!(s.entree(), "50");
}

#[test]
fn egal_repete_est_idempotent() {
    let mut s = session();
    taper_et_evaluer(&mut s, &["3", "*", "3"]);
    assert_eq!(s.entree(), "9");
    s.evaluer();
    s.evaluer();
    assert_eq!(s.entree(), "9");
    assert_eq!(s.derniere_reponse(), "9");
}

/* ------------------------ Historique ------------------------ */

#[test]
fn historique_plafonne_et_evince_le_plus_ancien() {
    let mut s = session();
    for i in 1..=(HISTORIQUE_MAX + 1) {
        s.reinitialiser();
        for c in i.to_string().chars() {
            s.ajouter_jeton(&c.to_string());
        }
        s.evaluer();
    }

    let h = s.historique();
    assert_eq!(h.len(), HISTORIQUE_MAX);
    // l'évaluation n°1 est évincée ; la n°2 ferme la liste
    assert!(h.iter().all(|e| e.expression != "1"));
    assert_eq!(h.last().unwrap().expression, "2");
    assert_eq!(h[0].expression, "11");
}

#[test]
fn historique_conserve_l_expression_telle_que_tapee() {
    let mut s = session();
    taper_et_evaluer(&mut s, &["5", "0", "%"]);
    // l'expression stockée est la forme de surface, pas la forme assainie
    assert_eq!(s.historique()[0].expression, "50%");
    assert_eq!(s.historique()[0].valeur, "0.5");
}

#[test]
fn selection_historique_recopie_la_valeur() {
    let mut s = session();
    taper_et_evaluer(&mut s, &["2", "+", "2"]);
    taper_et_evaluer(&mut s, &["9", "-", "1"]);

    s.selectionner_historique(1); // l'entrée "2+2" -> valeur "4"
    assert_eq!(s.entree(), "4");

    // hors bornes : silencieux, entrée intacte
    s.selectionner_historique(99);
    assert_eq!(s.entree(), "4");
}

/* ------------------------ Isolation des échecs ------------------------ */

#[test]
fn echec_n_altere_aucun_etat() {
    let mut s = session();
    taper_et_evaluer(&mut s, &["2", "+", "2"]);
    let historique_avant = s.historique().len();

    s.reinitialiser();
    taper(&mut s, &["(", "2", "+", "3"]); // parenthèse non refermée
    s.evaluer();

    assert!(s.en_erreur());
    assert_eq!(s.entree(), "(2+3"); // entrée intacte
    assert_eq!(s.derniere_reponse(), "4"); // Ans intact
    assert_eq!(s.historique().len(), historique_avant); // historique intact
}

#[test]
fn l_edition_suivante_efface_l_erreur() {
    let mut s = session();
    taper(&mut s, &["(", "2", "+", "3"]);
    s.evaluer();
    assert!(s.en_erreur());

    s.ajouter_jeton(")");
    assert!(!s.en_erreur());
    s.evaluer();
    assert_eq!(s.entree(), "5");
}

#[test]
fn division_par_zero_est_un_echec() {
    let mut s = session();
    taper(&mut s, &["1", "/", "0"]);
    s.evaluer();
    assert!(s.en_erreur());
    assert_eq!(s.entree(), "1/0");
}

/* ------------------------ Remise à zéro ------------------------ */

#[test]
fn la_remise_a_zero_conserve_ans_et_historique() {
    let mut s = session();
    taper_et_evaluer(&mut s, &["2", "+", "2"]);
    s.reinitialiser();

    assert_eq!(s.entree(), "0");
    assert_eq!(s.derniere_reponse(), "4");
    assert_eq!(s.historique().len(), 1);
}
