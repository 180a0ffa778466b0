//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la fenêtre (entrée, préfixe, valeur, erreur, digits,
//! règles, démarche, rapport d’exemples) et offrir des opérations simples (C/CLR/AC)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucune conversion ni calcul ici.
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur la précision d’affichage (digits).

use notation_polonaise::noyau::Regles;

/// Précision d’affichage par défaut (lecture décimale tronquée).
const DIGITS_DEFAUT: usize = 12;

/// Garde-fou : au-delà, f64 n’a plus de chiffres significatifs.
pub const DIGITS_MAX: usize = 15;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub arbre: String,
    pub prefixe: String,
    pub controle: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub prefixe: String, // notation polonaise
    pub lecture: String, // valeur (décimal tronqué)
    pub erreur: String,  // message d’erreur (si conversion/calcul échoue)
    pub ecart: bool,     // valeur préfixe != valeur directe de l’arbre

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- rapport des exemples de référence ---
    pub rapport: Vec<String>,

    // --- paramètres ---
    pub digits: usize,
    pub regles: Regles,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            prefixe: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            ecart: false,
            demarche: Demarche::default(),
            rapport: Vec::new(),
            digits: DIGITS_DEFAUT,
            regles: Regles::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + paramètres par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.rapport.clear();
        self.digits = DIGITS_DEFAUT;
        self.regles = Regles::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.prefixe.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.ecart = false;
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Place une erreur.
    ///
    /// Le dernier préfixe reste affiché ; valeur + démarche sont coupées.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.lecture.clear();
        self.ecart = false;
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Dépose un résultat complet (préfixe + valeur + démarche).
    pub fn set_resultats(
        &mut self,
        prefixe: impl Into<String>,
        lecture: impl Into<String>,
        ecart: bool,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.prefixe = prefixe.into();
        self.lecture = lecture.into();
        self.ecart = ecart;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : limite digits.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        self.focus_entree = true;
    }

    /// Change les règles : les résultats affichés ne correspondent plus.
    pub fn set_regles(&mut self, regles: Regles) {
        if regles != self.regles {
            self.regles = regles;
            self.clear_resultats();
            self.rapport.clear();
        }
    }
}
