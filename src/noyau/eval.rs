// src/noyau/eval.rs
//
// Pipeline d'évaluation (opération "=")
// -------------------------------------
// assainir -> portée (mode d'angle + Ans) -> moteur externe -> formatage.
//
// Tout échec (syntaxe, calcul, formatage) se replie sur une seule issue
// "expression invalide" ; aucun état n'est modifié ici — la session
// applique les effets (Ans, historique, entrée) sur succès seulement.

use super::angle::ModeAngle;
use super::moteur::{ErreurEvaluation, Evaluateur};
use super::portee::portee_evaluation;

/// Précision d'affichage des résultats (chiffres significatifs).
pub const PRECISION_AFFICHAGE: usize = 14;

/// Réécrit la syntaxe de surface dans le vocabulaire du moteur :
/// - `%` n'est pas une syntaxe du moteur : facteur `*(1/100)` ;
/// - `Ans` devient la dernière réponse, parenthésée pour la précédence ;
/// - le glyphe `π` du pavé devient la constante `pi` du moteur ;
/// - `!` postfixe n'est pas une syntaxe du moteur : `x!` devient l'appel
///   `fact(x)` (liaison fournie par la portée).
pub fn assainir(expression: &str, derniere_reponse: &str) -> String {
    let s = expression
        .replace('%', "*(1/100)")
        .replace("Ans", &format!("({derniere_reponse})"))
        .replace('π', "pi");
    // en dernier : les réécritures précédentes peuvent produire des
    // opérandes parenthésés devant un `!` (Ans, notamment)
    reecrire_factorielles(&s)
}

/// `<opérande>!` -> `fact(<opérande>)`, opérande = nombre/constante, ou
/// groupe parenthésé avec son éventuel nom de fonction accolé. Un `!`
/// sans opérande est laissé tel quel : le moteur le rejettera.
fn reecrire_factorielles(expression: &str) -> String {
    let mut sortie: Vec<char> = Vec::with_capacity(expression.len() + 8);

    for c in expression.chars() {
        if c != '!' {
            sortie.push(c);
            continue;
        }

        let debut = debut_operande(&sortie);
        if debut == sortie.len() {
            sortie.push('!');
            continue;
        }

        sortie.splice(debut..debut, "fact(".chars());
        sortie.push(')');
    }

    sortie.into_iter().collect()
}

/// Index (dans `sortie`) du début de l'opérande qui précède un `!`.
fn debut_operande(sortie: &[char]) -> usize {
    let mut i = sortie.len();

    // groupe parenthésé : on remonte à la parenthèse ouvrante appariée,
    // puis on embarque le nom de fonction accolé ("sin(…)" entier)
    if i > 0 && sortie[i - 1] == ')' {
        let mut profondeur = 0usize;
        while i > 0 {
            i -= 1;
            match sortie[i] {
                ')' => profondeur += 1,
                '(' => {
                    profondeur -= 1;
                    if profondeur == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
        while i > 0 && (sortie[i - 1].is_ascii_alphanumeric() || sortie[i - 1] == '_') {
            i -= 1;
        }
        return i;
    }

    // nombre ou constante nommée (pi, e, fact(…) déjà réécrit…)
    while i > 0 && (sortie[i - 1].is_ascii_alphanumeric() || sortie[i - 1] == '.' || sortie[i - 1] == '_') {
        i -= 1;
    }
    i
}

/// Évalue `expression` (entrée NON assainie, jamais modifiée ici) et rend
/// la valeur formatée. Les effets sur la session sont à la charge de
/// l'appelant.
pub fn evaluer_expression(
    expression: &str,
    mode: ModeAngle,
    derniere_reponse: &str,
    moteur: &impl Evaluateur,
) -> Result<String, ErreurEvaluation> {
    let assainie = assainir(expression, derniere_reponse);

    // Ans en tant que constante de portée ; la dernière réponse est
    // toujours une sortie de notre formateur, donc numérique.
    let reponse: f64 = derniere_reponse.parse().unwrap_or(0.0);
    let portee = portee_evaluation(mode, reponse);

    let valeur = moteur.evaluer(&assainie, &portee)?;
    let affichage = moteur.formater(valeur, PRECISION_AFFICHAGE)?;

    // Certains formateurs rendent un littéral au lieu d'échouer.
    if affichage == "Error" || affichage == "NaN" {
        return Err(ErreurEvaluation::Formatage);
    }

    Ok(affichage)
}
