// src/noyau/regles.rs
//
// Règles de conversion (configuration du noyau).
// Par défaut : comportement de référence, y compris l’anomalie de `-`
// (rendu "plus récent d’abord", non compensé au calcul : 7-2 vaut -5).
// corrigees() active les deux corrections connues.

use super::operateur::Op;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Regles {
    /// Rendre `-` opérande gauche d’abord, comme `/` et `^`.
    pub moins_corrige: bool,

    /// `^` associatif à droite (`2^3^2` = 2^9).
    pub puissance_droite: bool,
}

impl Regles {
    /// Comportement de référence.
    pub fn reference() -> Self {
        Self::default()
    }

    pub fn corrigees() -> Self {
        Self {
            moins_corrige: true,
            puissance_droite: true,
        }
    }

    pub fn avec_moins_corrige(mut self, actif: bool) -> Self {
        self.moins_corrige = actif;
        self
    }

    pub fn avec_puissance_droite(mut self, actif: bool) -> Self {
        self.puissance_droite = actif;
        self
    }

    /// Ordre de rendu effectif d’un opérateur binaire.
    pub fn gauche_d_abord(&self, op: Op) -> bool {
        op.gauche_d_abord() || (op == Op::Sub && self.moins_corrige)
    }

    /// Faut-il réduire le sommet (priorité `sommet`) avant d’empiler `courant` ?
    /// Égalité => gauche à droite, sauf `^` associatif à droite.
    pub fn reduit_avant(&self, courant: Op, sommet: u8) -> bool {
        if courant == Op::Pow && self.puissance_droite {
            courant.priorite() < sommet
        } else {
            courant.priorite() <= sommet
        }
    }
}
