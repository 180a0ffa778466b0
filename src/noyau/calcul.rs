// src/noyau/calcul.rs
//
// Calcul d’une chaîne en notation préfixe.
// 1. retire toutes les parenthèses (la structure est déjà résolue)
// 2. découpe sur les espaces, puis inverse l’ordre des jetons
// 3. une seule pile numérique :
//    - nombre   => empilé (signé ou décimal : "-5", "2.5")
//    - trig     => dépile 1 opérande
//    - binaire  => dépile `operande1` puis `operande2`, empile `operande1 op operande2`
//    - autre    => `OperateurInvalide`
// 4. il doit rester exactement une valeur

use std::str::FromStr;

use log::debug;
use num_traits::Float;

use super::erreur::{ErreurNotation, Malformation, Result};
use super::operateur::{Op, Trig};

/// Calcule en double précision.
pub fn evaluate(prefixe: &str) -> Result<f64> {
    evaluate_as::<f64>(prefixe)
}

/// Calcule dans n’importe quel flottant (`f32`, `f64`).
pub fn evaluate_as<F>(prefixe: &str) -> Result<F>
where
    F: Float + FromStr,
{
    let texte = strip_brackets(prefixe);
    let mut pile: Vec<F> = Vec::new();

    for jeton in texte.split_whitespace().rev() {
        if est_numerique(jeton) {
            let v = jeton
                .parse::<F>()
                .map_err(|_| Malformation::NombreInvalide)?;
            pile.push(v);
            continue;
        }

        let operande1 = pile.pop().ok_or(Malformation::OperandeManquant)?;

        if let Ok(f) = jeton.parse::<Trig>() {
            pile.push(f.appliquer(operande1));
            continue;
        }

        let op = symbole_binaire(jeton)
            .ok_or_else(|| ErreurNotation::OperateurInvalide(jeton.to_string()))?;
        let operande2 = pile.pop().ok_or(Malformation::OperandeManquant)?;
        pile.push(op.appliquer(operande1, operande2));
    }

    let resultat = pile.pop().ok_or(Malformation::EntreeVide)?;
    if !pile.is_empty() {
        return Err(Malformation::OperandesEnTrop(pile.len()).into());
    }

    debug!("calcul {prefixe:?} = {:?}", resultat.to_f64());
    Ok(resultat)
}

/// Retire toutes les parenthèses. Idempotent.
pub fn strip_brackets(s: &str) -> String {
    s.chars().filter(|&c| c != '(' && c != ')').collect()
}

// Numérique = contient au moins un chiffre ("-5", ".5", "1e3").
// "inf" / "NaN" n’en ont pas : ce sont des opérateurs invalides.
fn est_numerique(jeton: &str) -> bool {
    jeton.bytes().any(|b| b.is_ascii_digit())
}

fn symbole_binaire(jeton: &str) -> Option<Op> {
    let mut chars = jeton.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Op::from_char(c),
        _ => None,
    }
}
