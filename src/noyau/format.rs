// src/noyau/format.rs

use super::arbre::Noeud;
use super::operateur::Op;

/* ------------------------ Valeurs ------------------------ */

/// Lecture décimale tronquée à `digits` chiffres après la virgule,
/// zéros finaux retirés. Non fini => "indéfini".
pub fn format_valeur(v: f64, digits: usize) -> String {
    if !v.is_finite() {
        return "indéfini".to_string();
    }

    // au-delà de 15 décimales, f64 n’a plus rien à dire
    let digits = digits.min(15);
    let facteur = 10f64.powi(digits as i32);
    let tronque = if (v * facteur).is_finite() {
        (v * facteur).trunc() / facteur
    } else {
        v
    };
    let mut s = format!("{tronque:.digits$}");

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/* ------------------------ Arbre -> infixe ------------------------ */

/// Infixe lisible, parenthèses minimales pour rester fidèle à l’arbre.
/// Écriture à plat (pile de morceaux), quelle que soit la profondeur.
pub fn format_expr_pretty(e: &Noeud) -> String {
    let mut out = String::new();
    let mut pile = vec![Morceau::Arbre(e)];

    while let Some(morceau) = pile.pop() {
        match morceau {
            Morceau::Texte(t) => out.push_str(t),
            Morceau::Arbre(Noeud::Nombre(n)) => out.push_str(n),
            Morceau::Arbre(Noeud::Unaire(f, x)) => {
                out.push_str(f.nom());
                out.push('(');
                pile.push(Morceau::Texte(")"));
                pile.push(Morceau::Arbre(x));
            }
            Morceau::Arbre(Noeud::Binaire(op, g, d)) => {
                // empilé à l’envers : gauche sort en premier
                empiler_entoure(&mut pile, d, besoin_parentheses(*op, d, Cote::Droite));
                pile.push(Morceau::Texte(symbole_infixe(*op)));
                empiler_entoure(&mut pile, g, besoin_parentheses(*op, g, Cote::Gauche));
            }
        }
    }
    out
}

enum Morceau<'a> {
    Arbre(&'a Noeud),
    Texte(&'static str),
}

fn symbole_infixe(op: Op) -> &'static str {
    match op {
        Op::Add => " + ",
        Op::Sub => " - ",
        Op::Mul => " * ",
        Op::Div => " / ",
        Op::Pow => " ^ ",
    }
}

#[derive(Clone, Copy)]
enum Cote {
    Gauche,
    Droite,
}

fn besoin_parentheses(parent: Op, enfant: &Noeud, cote: Cote) -> bool {
    let (p, e) = (parent.priorite(), enfant.priorite());
    if e != p {
        return e < p;
    }
    // même priorité : l’arbre dit qui a été groupé en premier
    match cote {
        Cote::Gauche => parent == Op::Pow,
        Cote::Droite => parent != Op::Pow,
    }
}

fn empiler_entoure<'a>(pile: &mut Vec<Morceau<'a>>, e: &'a Noeud, parentheses: bool) {
    if parentheses {
        pile.push(Morceau::Texte(")"));
        pile.push(Morceau::Arbre(e));
        pile.push(Morceau::Texte("("));
    } else {
        pile.push(Morceau::Arbre(e));
    }
}
