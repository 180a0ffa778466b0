// src/noyau/operateur.rs
//
// Opérateurs binaires + fonctions trig (unaires)
// ----------------------------------------------
// Table de priorité :
//   + -            => 1
//   * /            => 2
//   ^              => 3
//   cos sin tan cot => 4
//   tout le reste (dont la sentinelle "(") => 0
//
// L’ordre de rendu préfixe est une propriété DÉCLARÉE de l’opérateur
// (gauche_d_abord), pas une branche cachée dans la conversion.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

/// Priorité de la sentinelle (parenthèse ouvrante) et des symboles inconnus.
pub const PRIORITE_NEUTRE: u8 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    pub const TOUS: [Op; 5] = [Op::Add, Op::Sub, Op::Mul, Op::Div, Op::Pow];

    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            '^' => Some(Op::Pow),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
            Op::Pow => '^',
        }
    }

    pub fn priorite(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
            Op::Pow => 3,
        }
    }

    /// Rendu "opérande gauche d’abord" (sinon : opérande le plus récent d’abord).
    ///
    /// Le calcul relit les jetons à l’envers : seuls ces opérateurs sont
    /// compensés. `-` ne l’est pas (voir `Regles::moins_corrige`).
    pub fn gauche_d_abord(self) -> bool {
        matches!(self, Op::Pow | Op::Div)
    }

    /// Application dans l’ordre de dépilement du calcul : `a` = premier dépilé.
    pub fn appliquer<F: Float>(self, a: F, b: F) -> F {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => a / b,
            Op::Pow => a.powf(b),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trig {
    Cos,
    Sin,
    Tan,
    Cot,
}

impl Trig {
    pub const TOUTES: [Trig; 4] = [Trig::Cos, Trig::Sin, Trig::Tan, Trig::Cot];

    pub fn nom(self) -> &'static str {
        match self {
            Trig::Cos => "cos",
            Trig::Sin => "sin",
            Trig::Tan => "tan",
            Trig::Cot => "cot",
        }
    }

    pub fn priorite(self) -> u8 {
        4
    }

    /// Lettre pouvant appartenir à un nom de fonction trig.
    pub fn est_lettre(c: char) -> bool {
        Self::TOUTES.iter().any(|t| t.nom().contains(c))
    }

    /// Argument en radians. cot(x) = 1 / tan(x).
    pub fn appliquer<F: Float>(self, x: F) -> F {
        match self {
            Trig::Cos => x.cos(),
            Trig::Sin => x.sin(),
            Trig::Tan => x.tan(),
            Trig::Cot => F::one() / x.tan(),
        }
    }
}

impl FromStr for Trig {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TOUTES.into_iter().find(|t| t.nom() == s).ok_or(())
    }
}

impl fmt::Display for Trig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

/// Table de priorité totale sur les symboles textuels : ne échoue jamais,
/// renvoie 0 pour la sentinelle "(" et tout symbole inconnu.
pub fn priorite(symbole: &str) -> u8 {
    let s = symbole.trim();
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(op) = Op::from_char(c) {
            return op.priorite();
        }
    }
    s.parse::<Trig>()
        .map(Trig::priorite)
        .unwrap_or(PRIORITE_NEUTRE)
}
