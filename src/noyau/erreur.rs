// src/noyau/erreur.rs
//
// Erreurs du noyau (conversion + calcul). Deux familles seulement :
// - OperateurInvalide   : le calcul rencontre un jeton ni numérique ni opérateur connu
// - ExpressionMalformee : entrée structurellement fausse (parenthèses, caractères, pile)
//
// Aucune reprise : toute erreur rejette définitivement l’entrée donnée.

use thiserror::Error;

/// Résultat du noyau.
pub type Result<T> = std::result::Result<T, ErreurNotation>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNotation {
    /// Jeton inconnu en notation préfixe.
    #[error("opérateur invalide: {0:?}")]
    OperateurInvalide(String),

    /// Entrée malformée (détection bon marché).
    #[error("expression malformée: {0}")]
    ExpressionMalformee(#[from] Malformation),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu '{caractere}' (position {position})")]
    CaractereInattendu { caractere: char, position: usize },

    #[error("parenthèse fermante sans ouvrante (position {0})")]
    ParentheseNonOuverte(usize),

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),

    #[error("fonction {0} sans parenthèse ouvrante")]
    FonctionSansArgument(String),

    #[error("opérande manquant")]
    OperandeManquant,

    #[error("{0} opérande(s) en trop")]
    OperandesEnTrop(usize),

    #[error("nombre invalide")]
    NombreInvalide,
}
