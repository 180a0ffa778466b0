// src/noyau/jetons.rs

use super::erreur::{Malformation, Result};
use super::operateur::{Op, Trig};

/// Classification purement lexicale, caractère par caractère.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton {
    Chiffre(char),
    Operateur(Op),

    // Une lettre d’un nom trig (cos, sin, tan, cot), normalisée en minuscule.
    // Le nom complet n’est connu qu’à la parenthèse ouvrante suivante.
    LettreTrig(char),

    Ouvrante,
    Fermante,
}

/// Classe un caractère.
/// - `Ok(None)` pour les espaces (ignorés)
/// - erreur pour tout caractère hors alphabet
///
/// `position` = index du caractère (pas de l’octet), pour les messages.
pub fn classify(c: char, position: usize) -> Result<Option<Jeton>> {
    if c.is_whitespace() {
        return Ok(None);
    }
    if c.is_ascii_digit() {
        return Ok(Some(Jeton::Chiffre(c)));
    }

    let jeton = match c {
        '(' => Jeton::Ouvrante,
        ')' => Jeton::Fermante,
        _ => {
            if let Some(op) = Op::from_char(c) {
                Jeton::Operateur(op)
            } else {
                let l = c.to_ascii_lowercase();
                if !Trig::est_lettre(l) {
                    return Err(Malformation::CaractereInattendu {
                        caractere: c,
                        position,
                    }
                    .into());
                }
                Jeton::LettreTrig(l)
            }
        }
    };
    Ok(Some(jeton))
}

/// Tokenize une chaîne en jetons (espaces retirés).
pub fn tokenize(s: &str) -> Result<Vec<Jeton>> {
    let mut out = Vec::with_capacity(s.len());
    for (position, c) in s.chars().enumerate() {
        if let Some(j) = classify(c, position)? {
            out.push(j);
        }
    }
    Ok(out)
}

/// Format utilitaire (démarche) : jetons séparés par un espace,
/// chiffres et lettres consécutifs recollés ("10", "cos").
pub fn format_tokens(tokens: &[Jeton]) -> String {
    let mut out = String::new();
    let mut precedent: Option<&Jeton> = None;

    for t in tokens {
        let colle = matches!(
            (precedent, t),
            (Some(Jeton::Chiffre(_)), Jeton::Chiffre(_))
                | (Some(Jeton::LettreTrig(_)), Jeton::LettreTrig(_))
        );
        if precedent.is_some() && !colle {
            out.push(' ');
        }

        match t {
            Jeton::Chiffre(c) | Jeton::LettreTrig(c) => out.push(*c),
            Jeton::Operateur(op) => out.push(op.symbole()),
            Jeton::Ouvrante => out.push('('),
            Jeton::Fermante => out.push(')'),
        }
        precedent = Some(t);
    }
    out
}
