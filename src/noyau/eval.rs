//! Noyau: pipeline complet
//!
//! jetons -> conversion (arbre) -> rendu préfixe -> calcul sur la chaîne
//!        -> contrôle direct sur l’arbre -> lecture décimale
//!
//! Le contrôle ne remplace jamais le calcul : il signale seulement un écart
//! (anomalie connue de `-` avec les règles de référence).

use log::{debug, warn};

use super::calcul::evaluate;
use super::conversion::{convert_with, parse};
use super::erreur::{Malformation, Result};
use super::format::{format_expr_pretty, format_valeur};
use super::jetons::{format_tokens, tokenize};
use super::regles::Regles;

/// Exemples de référence (rapport).
pub const EXEMPLES: [&str; 5] = ["7+2", "5*(9+3)", "cos(10+1)", "19^2", "10 / 2^3"];

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub arbre: String,
    pub prefixe: String,
    pub controle: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct Calcul {
    pub prefixe: String,
    pub valeur: f64,
    /// Lecture décimale tronquée.
    pub lecture: String,
    /// Le calcul préfixe diffère de la valeur directe de l’arbre.
    pub ecart: bool,
    pub demarche: DemarcheNoyau,
}

/// API publique : convertit puis calcule une expression infixe.
pub fn eval_expression(expr_str: &str, regles: &Regles, digits: usize) -> Result<Calcul> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(Malformation::EntreeVide.into());
    }

    // 1) Jetons (démarche seulement)
    let jetons = tokenize(s)?;

    // 2) Arbre + rendu préfixe
    let arbre = parse(s, regles)?;
    let prefixe = arbre.to_prefix(regles);

    // 3) Calcul sur la chaîne (seule source du résultat)
    let valeur = evaluate(&prefixe)?;

    // 4) Contrôle direct
    let controle = arbre.valeur::<f64>();
    let ecart = match controle {
        Some(c) => !memes_valeurs(valeur, c),
        None => false,
    };
    if ecart {
        warn!("écart pour {s:?}: préfixe={valeur:?}, arbre={controle:?}");
    }

    let note = if ecart {
        "Écart : `-` est rendu opérande le plus récent d’abord et n’est pas compensé au calcul (règles de référence).".to_string()
    } else {
        "Pipeline: jetons → arbre → préfixe → calcul (pile, ordre inverse).".to_string()
    };

    let demarche = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        arbre: format_expr_pretty(&arbre),
        prefixe: prefixe.clone(),
        controle: controle
            .map(|c| format_valeur(c, digits))
            .unwrap_or_default(),
        note,
    };

    debug!("{s:?} --> {prefixe:?} = {valeur:?}");

    Ok(Calcul {
        prefixe,
        valeur,
        lecture: format_valeur(valeur, digits),
        ecart,
        demarche,
    })
}

/// Rapport "expression --> préfixe = valeur" pour chaque exemple.
pub fn rapport_exemples(regles: &Regles) -> Vec<String> {
    EXEMPLES
        .iter()
        .map(|ex| match ligne_exemple(ex, regles) {
            Ok(l) => l,
            Err(e) => format!("{ex} --> erreur: {e}"),
        })
        .collect()
}

fn ligne_exemple(ex: &str, regles: &Regles) -> Result<String> {
    let prefixe = convert_with(ex, regles)?;
    let valeur = evaluate(&prefixe)?;
    Ok(format!("{ex} --> {prefixe} = {valeur:?}"))
}

/// Égalité tolérante (les deux chemins n’associent pas les flottants pareil).
pub(crate) fn memes_valeurs(a: f64, b: f64) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return (a.is_nan() && b.is_nan()) || a == b;
    }
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
