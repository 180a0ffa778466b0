//! Tests scientifiques (campagne) : aller-retour infixe -> préfixe -> valeur.
//!
//! But : vérifier le contrat fonctionnel sur des familles d’expressions.
//! - valeurs attendues calculées par l’hôte (jamais de littéral arrondi à la main)
//! - `+ * / ^` et trig : valeur correcte exigée
//! - `-` : anomalie de référence documentée et gardée, corrigée avec `Regles::corrigees()`
//! - budget temps global
//!
//! Notes :
//! - Règles de référence : `^` associatif à GAUCHE (2^3^2 = 64).
//! - Toutes les comparaisons passent par `memes_valeurs` (pas d’égalité stricte entre chemins
//!   flottants différents), sauf les exemples de référence.

use std::time::{Duration, Instant};

use super::calcul::evaluate;
use super::conversion::{convert, convert_with};
use super::eval::{eval_expression, memes_valeurs};
use super::regles::Regles;

fn aller_retour(expr: &str) -> f64 {
    let prefixe = convert(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    evaluate(&prefixe).unwrap_or_else(|e| panic!("expr={expr:?} prefixe={prefixe:?} err={e}"))
}

fn aller_retour_avec(expr: &str, regles: &Regles) -> f64 {
    let prefixe = convert_with(expr, regles).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    evaluate(&prefixe).unwrap_or_else(|e| panic!("expr={expr:?} prefixe={prefixe:?} err={e}"))
}

fn assert_valeur(expr: &str, attendu: f64) {
    let v = aller_retour(expr);
    assert!(memes_valeurs(v, attendu), "expr={expr:?} obtenu={v} attendu={attendu}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Scénarios de référence ------------------------ */

#[test]
fn sci_scenarios_reference() {
    assert_eq!(aller_retour("7+2"), 9.0);
    assert_eq!(aller_retour("5*(9+3)"), 60.0);
    assert_eq!(aller_retour("19^2"), 361.0);
    assert_eq!(aller_retour("10 / 2^3"), 1.25);
    assert_eq!(aller_retour("cos(10+1)"), 11.0_f64.cos());
}

#[test]
fn sci_numeral_seul() {
    assert_eq!(convert("42").unwrap(), "42 ");
    assert_eq!(aller_retour("42"), 42.0);
    assert_eq!(aller_retour("007"), 7.0);
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn sci_precedence_adjacente() {
    // a OP1 b OP2 c : priorité plus forte groupée d’abord, égalité à gauche
    assert_valeur("2+3*4", 2.0 + 3.0 * 4.0);
    assert_valeur("2*3+4", 2.0 * 3.0 + 4.0);
    assert_valeur("2*3^2", 2.0 * 9.0);
    assert_valeur("3^2*2", 9.0 * 2.0);
    assert_valeur("100/5/4", (100.0 / 5.0) / 4.0);
    assert_valeur("100/5*4", (100.0 / 5.0) * 4.0);
    assert_valeur("8*3/4", (8.0 * 3.0) / 4.0);
    assert_valeur("1+2^3", 1.0 + 8.0);
    assert_valeur("36/2^2", 36.0 / 4.0);
}

#[test]
fn sci_parentheses() {
    assert_valeur("(2+3)*4", 20.0);
    assert_valeur("2*(3+4)*5", 70.0);
    assert_valeur("((1+2)*(3+4))/7", 3.0);
    assert_valeur("(100/(5*4))", 5.0);
    assert_valeur("2^(1+2)", 8.0);
    assert_valeur("(1+1)^(2*2)", 16.0);
}

#[test]
fn sci_puissance_associativite() {
    // référence : gauche ; corrigée : droite
    assert_eq!(aller_retour("2^3^2"), 64.0);
    assert_eq!(aller_retour_avec("2^3^2", &Regles::corrigees()), 512.0);
    // parenthèses explicites : même valeur partout
    assert_eq!(aller_retour("2^(3^2)"), 512.0);
}

/* ------------------------ Trig ------------------------ */

#[test]
fn sci_trig_radians() {
    assert_eq!(aller_retour("sin(0)"), 0.0);
    assert_eq!(aller_retour("cos(0)"), 1.0);
    assert_valeur("tan(1)", 1.0_f64.tan());
    assert_valeur("cot(1)", 1.0 / 1.0_f64.tan());
    assert_valeur("sin(2*3)", 6.0_f64.sin());
    assert_valeur("2*sin(3)", 2.0 * 3.0_f64.sin());
    assert_valeur("sin(1)^2+cos(1)^2", 1.0);
    assert_valeur("cos(sin(1))", 1.0_f64.sin().cos());
    assert_valeur("1/cot(2)", 2.0_f64.tan());
}

/* ------------------------ Anomalie de `-` ------------------------ */

#[test]
fn sci_moins_anomalie_gardee() {
    // Référence : `A-B` rendu "(- B A )" puis calculé B - A.
    assert_eq!(convert("7-2").unwrap(), "(- 2 7 )");
    assert_eq!(aller_retour("7-2"), -5.0);
    assert_eq!(aller_retour("10-(2*3)"), -4.0);

    // Corrigée : valeur mathématique.
    let r = Regles::corrigees();
    assert_eq!(aller_retour_avec("7-2", &r), 5.0);
    assert_eq!(aller_retour_avec("10-2*3", &r), 4.0);
    assert_eq!(aller_retour_avec("10-2-3", &r), 5.0);
    assert_eq!(aller_retour_avec("cos(0)-1", &r), 0.0);
}

#[test]
fn sci_moins_commute_sans_effet_sur_les_autres() {
    // sans `-`, les deux jeux de règles s’accordent (hors ^ en chaîne)
    let r = Regles::reference().avec_moins_corrige(true);
    for e in ["7+2", "5*(9+3)", "10 / 2^3", "cos(10+1)", "2*3+4/8"] {
        assert_eq!(convert(e).unwrap(), convert_with(e, &r).unwrap(), "expr={e:?}");
    }
}

/* ------------------------ Stress borné ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let start = Instant::now();
    let max = Duration::from_millis(500);

    // 1+1+...+1 (n fois)
    let n = 1_000;
    let expr = vec!["1"; n].join("+");
    assert_eq!(aller_retour(&expr), n as f64);
    budget(start, max);
}

#[test]
fn sci_stress_chaine_tres_longue() {
    // 200k termes : arbre de profondeur 200k, pile de thread réduite
    let h = std::thread::Builder::new()
        .stack_size(1024 * 1024)
        .spawn(|| {
            let start = Instant::now();
            let max = Duration::from_secs(10);

            let n = 200_000;
            let expr = vec!["1"; n].join("+");
            let prefixe = convert(&expr).unwrap();
            assert!(prefixe.starts_with("(+ 1 (+ 1 (+ 1 "));
            assert!(prefixe.ends_with("1 1 )))"));
            assert_eq!(evaluate(&prefixe).unwrap(), n as f64);

            let c = eval_expression(&expr, &Regles::reference(), 12).unwrap();
            assert_eq!(c.valeur, n as f64);
            assert!(!c.ecart);
            budget(start, max);
        })
        .unwrap();
    h.join().unwrap();
}

#[test]
fn sci_stress_imbrication() {
    let start = Instant::now();
    let max = Duration::from_millis(500);

    // (((...(1+1)...)*1) : profondeur bornée
    let profondeur = 200;
    let mut expr = String::from("1");
    for _ in 0..profondeur {
        expr = format!("({expr}+1)");
    }
    assert_eq!(aller_retour(&expr), (profondeur + 1) as f64);
    budget(start, max);
}
