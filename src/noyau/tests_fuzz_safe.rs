//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler conversion + calcul sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions générées AVEC leur valeur attendue (arbre connu)
//! - chaînes aléatoires sur l’alphabet : jamais de panique ; conversion Ok => calcul Ok

use std::time::{Duration, Instant};

use super::calcul::evaluate;
use super::conversion::{convert, convert_with};
use super::eval::memes_valeurs;
use super::erreur::ErreurNotation;
use super::regles::Regles;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Expression générée : texte infixe, valeur attendue, priorité de la racine.
struct Genere {
    texte: String,
    valeur: f64,
    priorite: u8,
}

const ATOME: u8 = u8::MAX;

fn gen_nombre(rng: &mut Rng) -> Genere {
    // 1..=99 : pas de zéro littéral (les divisions par zéro viennent des sous-expressions)
    let n = 1 + rng.pick(99);
    Genere {
        texte: n.to_string(),
        valeur: n as f64,
        priorite: ATOME,
    }
}

fn gen_trig(rng: &mut Rng, profondeur: u32, avec_moins: bool) -> Genere {
    let x = gen_expr(rng, profondeur.saturating_sub(1), avec_moins);
    let (nom, v) = match rng.pick(4) {
        0 => ("cos", x.valeur.cos()),
        1 => ("sin", x.valeur.sin()),
        2 => ("tan", x.valeur.tan()),
        _ => ("cot", 1.0 / x.valeur.tan()),
    };
    Genere {
        texte: format!("{nom}({})", x.texte),
        valeur: v,
        priorite: ATOME,
    }
}

/// `^` borné : petite base, petit exposant (pas d’explosion).
fn gen_puissance(rng: &mut Rng) -> Genere {
    let base = 1 + rng.pick(4);
    let exp = rng.pick(4);
    Genere {
        texte: format!("{base}^{exp}"),
        valeur: (base as f64).powf(exp as f64),
        priorite: 3,
    }
}

/// Parenthèses : nécessaires (tout associatif à gauche) ou ajoutées au hasard.
fn entoure(rng: &mut Rng, g: Genere, parent: u8, a_droite: bool) -> String {
    let necessaire = g.priorite < parent || (g.priorite == parent && a_droite);
    if necessaire || rng.pick(5) == 0 {
        format!("({})", g.texte)
    } else {
        g.texte
    }
}

fn gen_expr(rng: &mut Rng, profondeur: u32, avec_moins: bool) -> Genere {
    if profondeur == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => gen_trig(rng, profondeur, avec_moins),
        2 => gen_puissance(rng),
        _ => {
            let nb_ops = if avec_moins { 4 } else { 3 };
            let (sym, prio) = match rng.pick(nb_ops) {
                0 => ('+', 1),
                1 => ('*', 2),
                2 => ('/', 2),
                _ => ('-', 1),
            };
            let g = gen_expr(rng, profondeur - 1, avec_moins);
            let d = gen_expr(rng, profondeur - 1, avec_moins);
            let valeur = match sym {
                '+' => g.valeur + d.valeur,
                '*' => g.valeur * d.valeur,
                '/' => g.valeur / d.valeur,
                _ => g.valeur - d.valeur,
            };
            let sg = entoure(rng, g, prio, false);
            let sd = entoure(rng, d, prio, true);
            let espace = if rng.coin() { " " } else { "" };
            Genere {
                texte: format!("{sg}{espace}{sym}{espace}{sd}"),
                valeur,
                priorite: prio,
            }
        }
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_aller_retour_sans_moins() {
    let start = Instant::now();
    let max = Duration::from_secs(2);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2_000 {
        budget(start, max);
        let g = gen_expr(&mut rng, 4, false);
        if !g.valeur.is_finite() {
            continue;
        }

        let prefixe =
            convert(&g.texte).unwrap_or_else(|e| panic!("expr={:?} err={e}", g.texte));
        let v = evaluate(&prefixe)
            .unwrap_or_else(|e| panic!("expr={:?} prefixe={prefixe:?} err={e}", g.texte));

        assert!(
            !v.is_finite() || memes_valeurs(v, g.valeur),
            "expr={:?} prefixe={prefixe:?} obtenu={v} attendu={}",
            g.texte,
            g.valeur
        );
    }
}

#[test]
fn fuzz_aller_retour_moins_corrige() {
    let start = Instant::now();
    let max = Duration::from_secs(2);
    let mut rng = Rng::new(42);
    let regles = Regles::reference().avec_moins_corrige(true);

    for _ in 0..2_000 {
        budget(start, max);
        let g = gen_expr(&mut rng, 4, true);
        if !g.valeur.is_finite() {
            continue;
        }

        let prefixe = convert_with(&g.texte, &regles)
            .unwrap_or_else(|e| panic!("expr={:?} err={e}", g.texte));
        let v = evaluate(&prefixe)
            .unwrap_or_else(|e| panic!("expr={:?} prefixe={prefixe:?} err={e}", g.texte));

        assert!(
            !v.is_finite() || memes_valeurs(v, g.valeur),
            "expr={:?} prefixe={prefixe:?} obtenu={v} attendu={}",
            g.texte,
            g.valeur
        );
    }
}

#[test]
fn fuzz_alphabet_sans_panique() {
    const ALPHABET: &[u8] = b"0123456789+-*/^()  cosintacot";

    let start = Instant::now();
    let max = Duration::from_secs(2);
    let mut rng = Rng::new(7);

    let mut acceptees = 0usize;
    for _ in 0..5_000 {
        budget(start, max);
        let len = 1 + rng.pick(16) as usize;
        let s: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
            .collect();

        match convert(&s) {
            Ok(prefixe) => {
                acceptees += 1;
                // toute sortie de la conversion est calculable
                let r = evaluate(&prefixe);
                assert!(r.is_ok(), "s={s:?} prefixe={prefixe:?} r={r:?}");
            }
            Err(ErreurNotation::ExpressionMalformee(_)) => {}
            Err(e) => panic!("s={s:?} erreur inattendue côté conversion: {e}"),
        }
    }
    // l’alphabet produit forcément quelques numéraux valides
    assert!(acceptees > 0);
}

#[test]
fn fuzz_determinisme() {
    let mut a = Rng::new(123);
    let mut b = Rng::new(123);
    for _ in 0..50 {
        let ga = gen_expr(&mut a, 3, true);
        let gb = gen_expr(&mut b, 3, true);
        assert_eq!(ga.texte, gb.texte);
        assert_eq!(convert(&ga.texte), convert(&gb.texte));
    }
}
