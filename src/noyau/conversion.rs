// src/noyau/conversion.rs
//
// Infixe -> préfixe (notation polonaise entièrement parenthésée)
// ------------------------------------------------------------
// Un seul passage gauche -> droite, deux piles :
// - operandes  : sous-expressions déjà complètes (Noeud)
// - operateurs : opérateurs en attente + fonction trig + sentinelle "("
//
// Règles:
// - chiffre     : prolonge le numéral du sommet si `fusion`, sinon nouveau numéral
// - lettre trig : accumulée dans `fonction` (nom connu seulement à la "(" suivante)
// - "("         : empile la fonction accumulée (si présente) puis la sentinelle
// - ")"         : réduit jusqu’à la sentinelle, puis la retire
// - opérateur   : réduit tant que priorité(courant) <= priorité(sommet), puis empile
// - fin         : réduit tout ; il doit rester exactement un opérande
//
// La sentinelle a la priorité 0 : aucune réduction ne la traverse.

use std::mem;

use log::{debug, trace};

use super::arbre::Noeud;
use super::erreur::{Malformation, Result};
use super::jetons::{classify, Jeton};
use super::operateur::{Op, Trig, PRIORITE_NEUTRE};
use super::regles::Regles;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntreePile {
    Ouvrante,
    Binaire(Op),
    Fonction(Trig),
}

impl EntreePile {
    fn priorite(self) -> u8 {
        match self {
            EntreePile::Ouvrante => PRIORITE_NEUTRE,
            EntreePile::Binaire(op) => op.priorite(),
            EntreePile::Fonction(f) => f.priorite(),
        }
    }
}

/// État d’UNE conversion : créé par `parse`, jeté à la fin.
struct Convertisseur<'r> {
    regles: &'r Regles,
    operandes: Vec<Noeud>,
    operateurs: Vec<EntreePile>,
    fonction: String,
    fusion: bool,
}

/// Convertit avec les règles de référence.
pub fn convert(expression: &str) -> Result<String> {
    convert_with(expression, &Regles::default())
}

pub fn convert_with(expression: &str, regles: &Regles) -> Result<String> {
    let prefixe = parse(expression, regles)?.to_prefix(regles);
    debug!("conversion {expression:?} -> {prefixe:?}");
    Ok(prefixe)
}

/// Construit l’arbre (sans le rendre).
pub fn parse(expression: &str, regles: &Regles) -> Result<Noeud> {
    if expression.trim().is_empty() {
        return Err(Malformation::EntreeVide.into());
    }

    let mut conv = Convertisseur::new(regles);
    for (position, c) in expression.chars().enumerate() {
        if let Some(jeton) = classify(c, position)? {
            conv.traiter(jeton, position)?;
        }
    }
    conv.terminer()
}

impl<'r> Convertisseur<'r> {
    fn new(regles: &'r Regles) -> Self {
        Self {
            regles,
            operandes: Vec::new(),
            operateurs: Vec::new(),
            fonction: String::new(),
            fusion: false,
        }
    }

    fn traiter(&mut self, jeton: Jeton, position: usize) -> Result<()> {
        // un nom trig n’est suivi que de lettres ou de sa "("
        if !self.fonction.is_empty() && !matches!(jeton, Jeton::LettreTrig(_) | Jeton::Ouvrante) {
            return Err(Malformation::FonctionSansArgument(mem::take(&mut self.fonction)).into());
        }

        match jeton {
            Jeton::Chiffre(c) => self.chiffre(c),
            Jeton::LettreTrig(c) => {
                self.fonction.push(c);
                self.fusion = false;
            }
            Jeton::Ouvrante => self.ouvrante()?,
            Jeton::Fermante => self.fermante(position)?,
            Jeton::Operateur(op) => self.operateur(op)?,
        }
        Ok(())
    }

    fn chiffre(&mut self, c: char) {
        match self.operandes.last_mut() {
            Some(Noeud::Nombre(n)) if self.fusion => n.push(c),
            _ => self.operandes.push(Noeud::Nombre(c.to_string())),
        }
        self.fusion = true;
    }

    fn ouvrante(&mut self) -> Result<()> {
        if !self.fonction.is_empty() {
            let nom = mem::take(&mut self.fonction);
            match nom.parse::<Trig>() {
                Ok(f) => self.operateurs.push(EntreePile::Fonction(f)),
                Err(()) => return Err(Malformation::FonctionInconnue(nom).into()),
            }
        }
        self.operateurs.push(EntreePile::Ouvrante);
        self.fusion = false;
        Ok(())
    }

    fn fermante(&mut self, position: usize) -> Result<()> {
        loop {
            match self.operateurs.last().copied() {
                Some(EntreePile::Ouvrante) => {
                    self.operateurs.pop();
                    break;
                }
                Some(_) => self.reduire()?,
                None => return Err(Malformation::ParentheseNonOuverte(position).into()),
            }
        }
        self.fusion = false;
        Ok(())
    }

    fn operateur(&mut self, op: Op) -> Result<()> {
        while let Some(&sommet) = self.operateurs.last() {
            if !self.regles.reduit_avant(op, sommet.priorite()) {
                break;
            }
            self.reduire()?;
        }
        self.operateurs.push(EntreePile::Binaire(op));
        self.fusion = false;
        Ok(())
    }

    /// Une réduction : sommet des opérateurs + 1 ou 2 opérandes -> un noeud.
    fn reduire(&mut self) -> Result<()> {
        let entree = self.operateurs.pop().ok_or(Malformation::OperandeManquant)?;
        let operande1 = self.operandes.pop().ok_or(Malformation::OperandeManquant)?;

        let noeud = match entree {
            EntreePile::Binaire(op) => {
                // operande2 = celui empilé AVANT : côté gauche dans le texte
                let operande2 = self.operandes.pop().ok_or(Malformation::OperandeManquant)?;
                Noeud::binaire(op, operande2, operande1)
            }
            EntreePile::Fonction(f) => Noeud::unaire(f, operande1),
            EntreePile::Ouvrante => return Err(Malformation::ParentheseNonFermee.into()),
        };

        trace!("réduction {entree:?} ({} opérande(s) en attente)", self.operandes.len());
        self.operandes.push(noeud);
        Ok(())
    }

    fn terminer(mut self) -> Result<Noeud> {
        if !self.fonction.is_empty() {
            return Err(Malformation::FonctionSansArgument(self.fonction).into());
        }

        while let Some(&sommet) = self.operateurs.last() {
            if sommet == EntreePile::Ouvrante {
                return Err(Malformation::ParentheseNonFermee.into());
            }
            self.reduire()?;
        }

        let resultat = self.operandes.pop().ok_or(Malformation::OperandeManquant)?;
        if !self.operandes.is_empty() {
            return Err(Malformation::OperandesEnTrop(self.operandes.len()).into());
        }
        Ok(resultat)
    }
}
