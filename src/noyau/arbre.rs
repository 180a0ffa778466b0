// src/noyau/arbre.rs
//
// Arbre produit par la conversion (une réduction = un noeud).
// - Nombre  : numéral en chiffres décimaux (tel que lu)
// - Unaire  : fonction trig + argument
// - Binaire : opérateur + (gauche, droite) dans l’ordre du TEXTE SOURCE
//
// Le rendu préfixe est une traversée séparée et pure (to_prefix).
// Aucun parcours n’est récursif, libération comprise.
// Format de référence :
//   numéral   -> "42 "                (délimiteur final)
//   unaire    -> "(cos " + x + ")"
//   binaire   -> "(" + op + " " + a + b + ")"
//                a,b = (gauche, droite) si gauche_d_abord, sinon (droite, gauche)

use std::mem;

use num_traits::{Float, NumCast};

use super::operateur::{Op, Trig};
use super::regles::Regles;

#[derive(Debug, PartialEq, Eq)]
pub enum Noeud {
    Nombre(String),
    Unaire(Trig, Box<Noeud>),
    Binaire(Op, Box<Noeud>, Box<Noeud>),
}

// Parcours sans récursion : la profondeur suit la longueur de l’entrée
// ("1+1+...+1" donne une chaîne gauche de n noeuds).
enum Tache<'a> {
    Visiter(&'a Noeud),
    Fermer,
}

enum Etape<'a> {
    Descendre(&'a Noeud),
    Appliquer(&'a Noeud),
}

impl Noeud {
    pub fn binaire(op: Op, gauche: Noeud, droite: Noeud) -> Noeud {
        Noeud::Binaire(op, Box::new(gauche), Box::new(droite))
    }

    pub fn unaire(f: Trig, x: Noeud) -> Noeud {
        Noeud::Unaire(f, Box::new(x))
    }

    /// Rendu préfixe entièrement parenthésé.
    pub fn to_prefix(&self, regles: &Regles) -> String {
        let mut out = String::new();
        let mut pile = vec![Tache::Visiter(self)];

        while let Some(tache) = pile.pop() {
            match tache {
                Tache::Fermer => out.push(')'),
                Tache::Visiter(Noeud::Nombre(n)) => {
                    out.push_str(n);
                    out.push(' ');
                }
                Tache::Visiter(Noeud::Unaire(f, x)) => {
                    out.push('(');
                    out.push_str(f.nom());
                    out.push(' ');
                    pile.push(Tache::Fermer);
                    pile.push(Tache::Visiter(x));
                }
                Tache::Visiter(Noeud::Binaire(op, g, d)) => {
                    let (a, b) = if regles.gauche_d_abord(*op) {
                        (g, d)
                    } else {
                        (d, g)
                    };
                    out.push('(');
                    out.push(op.symbole());
                    out.push(' ');
                    pile.push(Tache::Fermer);
                    pile.push(Tache::Visiter(b));
                    pile.push(Tache::Visiter(a));
                }
            }
        }
        out
    }

    /// Valeur mathématique directe (gauche op droite), indépendante du rendu.
    /// Sert de contrôle face au calcul sur la chaîne préfixe.
    pub fn valeur<F: Float>(&self) -> Option<F> {
        let mut etapes = vec![Etape::Descendre(self)];
        let mut valeurs: Vec<F> = Vec::new();

        while let Some(etape) = etapes.pop() {
            match etape {
                Etape::Descendre(e) => match e {
                    Noeud::Nombre(n) => {
                        valeurs.push(n.parse::<f64>().ok().and_then(<F as NumCast>::from)?);
                    }
                    Noeud::Unaire(_, x) => {
                        etapes.push(Etape::Appliquer(e));
                        etapes.push(Etape::Descendre(x));
                    }
                    Noeud::Binaire(_, g, d) => {
                        etapes.push(Etape::Appliquer(e));
                        etapes.push(Etape::Descendre(d));
                        etapes.push(Etape::Descendre(g));
                    }
                },
                Etape::Appliquer(Noeud::Unaire(f, _)) => {
                    let x = valeurs.pop()?;
                    valeurs.push(f.appliquer(x));
                }
                Etape::Appliquer(Noeud::Binaire(op, _, _)) => {
                    let d = valeurs.pop()?;
                    let g = valeurs.pop()?;
                    valeurs.push(op.appliquer(g, d));
                }
                Etape::Appliquer(Noeud::Nombre(_)) => {}
            }
        }
        valeurs.pop()
    }

    /// Priorité du noeud racine (nombre = la plus forte).
    pub fn priorite(&self) -> u8 {
        match self {
            Noeud::Nombre(_) => u8::MAX,
            Noeud::Unaire(f, _) => f.priorite(),
            Noeud::Binaire(op, _, _) => op.priorite(),
        }
    }
}

// Libération à plat : les sous-arbres sont détachés dans une pile
// au lieu d’être libérés récursivement par Box.
impl Drop for Noeud {
    fn drop(&mut self) {
        let mut pile = Vec::new();
        detacher_enfants(self, &mut pile);
        while let Some(mut sous_arbre) = pile.pop() {
            detacher_enfants(&mut sous_arbre, &mut pile);
        }
    }
}

fn detacher_enfants(noeud: &mut Noeud, pile: &mut Vec<Box<Noeud>>) {
    match noeud {
        Noeud::Nombre(_) => {}
        Noeud::Unaire(_, x) => detacher(x, pile),
        Noeud::Binaire(_, g, d) => {
            detacher(g, pile);
            detacher(d, pile);
        }
    }
}

// Une feuille se libère sans récursion : elle reste en place.
fn detacher(enfant: &mut Box<Noeud>, pile: &mut Vec<Box<Noeud>>) {
    if !matches!(**enfant, Noeud::Nombre(_)) {
        pile.push(mem::replace(enfant, Box::new(Noeud::Nombre(String::new()))));
    }
}
