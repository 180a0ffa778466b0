//! Noyau notation polonaise
//!
//! Organisation interne :
//! - erreur.rs     : erreurs typées (opérateur invalide / expression malformée)
//! - operateur.rs  : opérateurs binaires, fonctions trig, table de priorité
//! - regles.rs     : règles de conversion (référence / corrigées)
//! - jetons.rs     : classification caractère par caractère
//! - arbre.rs      : noeuds + rendu préfixe (traversée pure)
//! - conversion.rs : infixe -> préfixe (deux piles, un passage)
//! - calcul.rs     : préfixe -> flottant (une pile, ordre inverse)
//! - format.rs     : lecture décimale + infixe lisible
//! - eval.rs       : pipeline complet + rapport d’exemples

pub mod arbre;
pub mod calcul;
pub mod conversion;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateur;
pub mod regles;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;


// API publique minimale
pub use calcul::evaluate;
pub use conversion::convert;
pub use eval::{eval_expression, rapport_exemples};
pub use regles::Regles;
